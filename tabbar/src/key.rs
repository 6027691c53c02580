use alloc::string::String;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type KeyIndexMap = HashMap<String, usize>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyIndexMap = BTreeMap<String, usize>;
