// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data models for the portfolio catalog and desktop layout.

pub mod catalog;
pub mod layout;
pub mod project;
