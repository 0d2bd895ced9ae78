/// Database layer for the contacts service
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool management with health checks
///
/// Schema lives in the `migrations/` directory at the workspace root and is
/// applied by the deployment (and by the integration tests); the service
/// itself assumes the schema exists.

pub mod pool;
