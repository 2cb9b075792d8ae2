mod client;

pub use client::Ec2Adapter;
