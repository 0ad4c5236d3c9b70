//! Test modules for the backend client
//!
//! HTTP behaviour is exercised against a throwaway local server; wire type
//! tests cover the envelope and product record shapes.

mod helpers;
