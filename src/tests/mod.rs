// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Crate-level test modules.
//!
//! Component unit tests live next to their code; this module holds tests
//! that cut across components and the shared fixtures they use.


pub use test_utils::TestFixture;
