//! Flat request parameter maps shared by query strings and request bodies.

// self
use crate::_prelude::*;

/// String-to-string parameter map with deterministic iteration order.
///
/// The map backs every parameterized call in the crate: authorization URL queries,
/// token exchange form bodies, resource query strings, and JSON POST bodies. Keys
/// are unique; inserting an existing key replaces the previous value. Arrays and
/// nested objects are not representable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestParams(BTreeMap<String, String>);
impl RequestParams {
	/// Creates an empty parameter map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a key/value pair, returning the value it replaced, if any.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.0.insert(key.into(), value.into())
	}

	/// Builder-style insert for inline construction.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(key, value);

		self
	}

	/// Returns the value stored under `key`, if any.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Returns `true` when the map holds no entries.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Number of entries in the map.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Iterates entries in ascending key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Renders the map as a JSON object with string members.
	pub fn to_json(&self) -> serde_json::Value {
		serde_json::Value::Object(
			self.iter().map(|(key, value)| (key.to_owned(), value.into())).collect(),
		)
	}
}
impl<K, V> FromIterator<(K, V)> for RequestParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(entries: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(entries.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}
}
impl<K, V, const N: usize> From<[(K, V); N]> for RequestParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from(entries: [(K, V); N]) -> Self {
		entries.into_iter().collect()
	}
}
