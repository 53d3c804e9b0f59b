// handlers/mod.rs - route handlers
//
// health.rs:        public endpoints (/, /health)
// prescriptions/:   bearer-token protected prescription CRUD

pub mod health;
pub mod prescriptions;
