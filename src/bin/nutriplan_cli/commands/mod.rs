// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// ABOUTME: Command implementations for nutriplan-cli
// ABOUTME: Plan generation, target calculation, and the feedback demonstration

pub mod plan;
pub mod targets;
