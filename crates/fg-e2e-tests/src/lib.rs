//! Intentionally empty — integration tests live under tests/.
