// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for media, catalog and config files.

pub mod media;
pub mod serialization;
