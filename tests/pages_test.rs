// ABOUTME: Integration tests for the static landing page
// ABOUTME: Verifies the embedded chat UI is served at the root path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Buddy Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use nutrition_buddy::routes::pages::PageRoutes;

use axum::http::StatusCode;

#[tokio::test]
async fn test_landing_page_is_served() {
    let router = PageRoutes::routes();

    let response = AxumTestRequest::get("/").send(router).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Nutrition Buddy"));
    assert!(response.text().contains("/api/chat"));
}
