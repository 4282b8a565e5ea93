//! # Tinycat BASIC
//!
//! A tiny line-numbered BASIC with numbers for its only data type.
//!
//! Run the executable for an interactive prompt, or pass a program
//! file to load it first. `--run` runs the file right away.
//! ```text
//! tinycat
//! tinycat hello.bas --run
//! ```
//!
//! The interpreter can also be embedded. Anything that implements
//! [`mach::Console`] can receive `PRINT` output and answer `INPUT`.
//! ```
//! use tinycat::mach::{Runtime, Transcript};
//!
//! let mut runtime = Runtime::new(Transcript::new());
//! runtime.enter("10 FOR I=1 TO 3").unwrap();
//! runtime.enter("20 PRINT I;").unwrap();
//! runtime.enter("30 NEXT I").unwrap();
//! runtime.run().unwrap();
//! assert_eq!(runtime.console().output(), "123");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/chapter_4.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_4;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
