pub mod portal_env;
