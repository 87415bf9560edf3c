// ABOUTME: Helper module index for integration tests
// ABOUTME: Exposes the axum oneshot request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

pub mod axum_test;
