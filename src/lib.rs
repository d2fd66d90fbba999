#![no_std]
#![feature(type_alias_impl_trait)]

pub mod config;
pub mod infrastructure;
