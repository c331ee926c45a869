#![allow(dead_code)]


pub(crate) use test_context::TestContext;
