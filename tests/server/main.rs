
mod fallback_api;
