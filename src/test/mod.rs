mod config;
mod latency;
