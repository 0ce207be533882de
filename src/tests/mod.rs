mod common;
mod integration;
mod mocks;
mod property;
