pub mod books;

use bookshelf_db::Db;
use bookshelf_kernel::ModuleRegistry;

/// Register all project-specific modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, db: &Db) {
    registry.register(books::create_module(db.clone()));
}
