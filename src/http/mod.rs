pub mod client;

pub use client::PricingClient;
