//! End-to-end tests for the PotWatch API live under `tests/`.
