//  Copyright 2023 MrCroxx
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//  http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.


//! A counting bloom filter that estimates how many times a string key has been
//! registered without storing the keys. It is a single table of counters. Each
//! key is mapped to three slots by hashing three views of the key: the key
//! itself, the key reversed, and the key interleaved with its reverse. When a
//! key is incremented, its three slots are incremented. Querying the count
//! returns 0 if any of the slots is still 0, or the average of the three slots
//! otherwise. Collisions can only raise the estimate, never lower it.
//!
//! Users are supposed to synchronize concurrent accesses to the data structure.
//!
//! E.g. increment("test") on a table of size 3
//! first("test")  = 1 -> increment index 1
//! second("tset") = 1 -> increment index 1
//! third("tsst")  = 0 -> increment index 0
//!
//! # Usage
//!
//! ```
//! use cbloom::{CountingTable, Error};
//!
//! const SIZE: usize = 1024;
//!
//! fn main() -> Result<(), Error> {
//!     let mut cbf = CountingTable::new(SIZE)?;
//!     for _ in 0..3 {
//!         cbf.increment("apple");
//!     }
//!
//!     assert!(cbf.count("apple")? >= 3);
//!     assert!(!cbf.increment(None));
//!     assert_eq!(cbf.count(None), Err(Error::NullInput));
//!
//!     cbf.clear();
//!     assert_eq!(cbf.count("apple")?, 0);
//!
//!     Ok(())
//! }
//! ```

mod base;
pub use base::*;

mod error;
pub use error::*;

mod hash;
