// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for trackg-cli
// ABOUTME: Provides access to catalog listing and stream replay commands

pub mod exercises;
pub mod replay;
