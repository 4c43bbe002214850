//! Concrete example kernels.
//!
//! These are "external collaborators" per `spec.md` section 1 — the core
//! takes kernels abstractly through the [`crate::kernel::Kernel`] trait —
//! but the testable scenarios in section 8 and the demo CLI both need
//! something concrete to run, so the handful from the source's
//! `kernels_2D.h` and `main.cpp` are reproduced here: a no-op passthrough
//! (`CopyKernel`), a time-indexed fill (`Color`), two fixed-coefficient
//! box blurs (`Blur3`, `Blur5`), and Conway's Game of Life (`Life`).

pub mod blur;
pub mod color;
pub mod copy;
pub mod life;

pub use blur::{Blur3, Blur5};
pub use color::Color;
pub use copy::CopyKernel;
pub use life::Life;
