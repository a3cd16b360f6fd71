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


use paste::paste;
use tracing::{debug, trace, warn};

use crate::error::{self, Error};
use crate::hash::{indices, is_any_zero};

macro_rules! counting_table {
    ($( {$type:ty, $suffix:ident}, )*) => {
        paste! {
            $(
                #[derive(Debug, Clone)]
                pub struct [<CountingTable $suffix>] {
                    table: Box<[$type]>,
                }

                impl [<CountingTable $suffix>] {
                    /// Create a table of `size` zeroed counters.
                    ///
                    /// Fails with [`Error::InvalidArgument`] if `size` is 0.
                    pub fn new(size: usize) -> error::Result<Self> {
                        if size == 0 {
                            warn!(size, "rejected counting table without slots");
                            return Err(Error::InvalidArgument { size });
                        }

                        let table = {
                            // Use `resize` instead of `vec![]` to avoid page faults caused by delayed allocation.
                            let mut data = Vec::with_capacity(size);
                            data.resize(size, 0);
                            data.into_boxed_slice()
                        };

                        debug_assert_eq!(table.len(), size);
                        debug!(size, counter = stringify!($type), "counting table created");

                        Ok(Self { table })
                    }

                    /// Register one occurrence of `key`.
                    ///
                    /// Each of the key's three slots is incremented, once per slot it maps to, so a
                    /// slot shared by two derivations grows by 2. Counters saturate at
                    /// [`Self::capacity`].
                    ///
                    /// Returns `false` without touching the table if `key` is `None`.
                    pub fn increment<'a>(&mut self, key: impl Into<Option<&'a str>>) -> bool {
                        let Some(key) = key.into() else {
                            return false;
                        };

                        for index in indices(key, self.table.len()) {
                            self.table[index] = self.table[index].saturating_add(1);
                        }
                        trace!(key, "key incremented");

                        true
                    }

                    /// Estimate how many times `key` has been incremented.
                    ///
                    /// Returns 0 if any of the key's slots is 0, otherwise the floored average of
                    /// the three slots. Collisions can only raise the estimate.
                    ///
                    /// Fails with [`Error::NullInput`] if `key` is `None`.
                    pub fn count<'a>(&self, key: impl Into<Option<&'a str>>) -> error::Result<$type> {
                        let key = key.into().ok_or(Error::NullInput)?;

                        let [first, second, third] = indices(key, self.table.len()).map(|index| self.table[index]);
                        if is_any_zero(first, second, third) {
                            trace!(key, "key has an empty slot");
                            return Ok(0);
                        }

                        // The average of three values never exceeds the largest of them.
                        let average = (first as u128 + second as u128 + third as u128) / 3;
                        Ok(average as $type)
                    }

                    /// Reset every counter to 0. The size is kept.
                    pub fn clear(&mut self) {
                        self.table.iter_mut().for_each(|v| *v = 0);
                        debug!(size = self.table.len(), "counting table cleared");
                    }

                    /// Read-only view of the counters, for diagnostics.
                    pub fn table(&self) -> &[$type] {
                        &self.table
                    }

                    pub fn size(&self) -> usize {
                        self.table.len()
                    }

                    pub fn capacity(&self) -> $type {
                        $type::MAX
                    }

                    pub fn memory(&self) -> usize {
                        ($type::BITS as usize * self.table.len() + usize::BITS as usize * 2) / 8
                    }
                }
            )*
        }
    };
}

macro_rules! for_all_uint_types {
    ($macro:ident) => {
        $macro! {
            {u8, U8},
            {u16, U16},
            {u32, U32},
            {u64, U64},
            {usize, Usize},
        }
    };
}

for_all_uint_types! { counting_table }

/// Counting table with 32-bit counters.
pub type CountingTable = CountingTableU32;
