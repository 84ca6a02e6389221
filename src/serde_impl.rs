//! Serde support for `Outcome` and `Maybe` (feature-gated).
//!
//! Both types serialize through their standard-library counterparts:
//! `Outcome<T, E>` uses the representation of `Result<T, E>` and
//! `Maybe<T>` that of `Option<T>`. Data written by code using the std
//! types deserializes directly into these, and vice versa.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::maybe::Maybe;
use crate::outcome::Outcome;

impl<T, E> Serialize for Outcome<T, E>
where
    T: Serialize,
    E: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let as_result: Result<&T, &E> = match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        };
        as_result.serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for Outcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Result::<T, E>::deserialize(deserializer).map(Outcome::from_result)
    }
}

impl<T> Serialize for Maybe<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_ref().into_option().serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Maybe<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Maybe::from_option)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Maybe, Outcome};

    #[test]
    fn outcome_round_trips_as_result() {
        let success = Outcome::<i32, String>::success(42);
        let json = serde_json::to_string(&success).unwrap();
        assert_eq!(json, r#"{"Ok":42}"#);
        let back: Outcome<i32, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, success);

        let failure = Outcome::<i32, String>::failure("nope".to_string());
        let json = serde_json::to_string(&failure).unwrap();
        assert_eq!(json, r#"{"Err":"nope"}"#);
        let back: Outcome<i32, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, failure);
    }

    #[test]
    fn maybe_round_trips_as_option() {
        let present = Maybe::present(7);
        let json = serde_json::to_string(&present).unwrap();
        assert_eq!(json, "7");
        let back: Maybe<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, present);

        let absent = Maybe::<i32>::absent();
        let json = serde_json::to_string(&absent).unwrap();
        assert_eq!(json, "null");
        let back: Maybe<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, absent);
    }

    #[test]
    fn interoperates_with_std_types() {
        let from_std = serde_json::to_string(&Ok::<i32, String>(1)).unwrap();
        let outcome: Outcome<i32, String> = serde_json::from_str(&from_std).unwrap();
        assert_eq!(outcome, Outcome::success(1));
    }
}
