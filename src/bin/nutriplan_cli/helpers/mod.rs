// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// ABOUTME: Helper utilities for nutriplan-cli
// ABOUTME: Terminal rendering of plans and targets

pub mod display;
