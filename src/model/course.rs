use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FetchError;

/// A price or hole count as the origin sends it: a JSON number, a JSON
/// string, or nothing at all.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseValue {
    Number(serde_json::Number),
    Text(String),
    #[default]
    Missing,
}

impl fmt::Display for CourseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseValue::Number(n) => write!(f, "{n}"),
            CourseValue::Text(s) => write!(f, "{s}"),
            CourseValue::Missing => Ok(()),
        }
    }
}

impl From<i32> for CourseValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for CourseValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub coursename: String,
    #[serde(default)]
    pub price: CourseValue,
    #[serde(default)]
    pub totalhole: CourseValue,
}

impl Course {
    #[must_use]
    pub fn new(
        coursename: impl Into<String>,
        price: impl Into<CourseValue>,
        totalhole: impl Into<CourseValue>,
    ) -> Self {
        Self {
            coursename: coursename.into(),
            price: price.into(),
            totalhole: totalhole.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Courses in the order the origin returned them. Only a JSON array decodes
/// into one; `null` or an object is a decode failure, not an empty list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCollection(Vec<Course>);

impl CourseCollection {
    #[must_use]
    pub fn new(courses: Vec<Course>) -> Self {
        Self(courses)
    }

    /// # Errors
    ///
    /// Will return `Err` if the body is not a JSON array of course records
    pub fn from_json_slice(body: &[u8]) -> Result<Self, FetchError> {
        Ok(serde_json::from_slice(body)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a CourseCollection {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
