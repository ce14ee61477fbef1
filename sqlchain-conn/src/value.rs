use sqlchain_error::Result;

macro_rules! impl_from_value_integer {
    ($ty:ty) => {
        impl FromValue for $ty {
            type Output = $ty;

            fn from_value(v: &Value) -> Result<Self::Output> {
                let out = match v {
                    Value::I64(v) => <$ty>::try_from(*v).ok(),
                    Value::U64(v) => <$ty>::try_from(*v).ok(),
                    Value::Bool(v) => Some(*v as $ty),
                    // Text protocol returns numbers as bytes
                    Value::Str(s) => s.trim().parse::<$ty>().ok(),
                    Value::Bytes(b) => std::str::from_utf8(b)
                        .ok()
                        .and_then(|s| s.trim().parse::<$ty>().ok()),
                    _ => None,
                };

                out.ok_or_else(|| {
                    sqlchain_error::from_value!(
                        "Invalid value: {:?}, output type: {}",
                        v,
                        stringify!($ty)
                    )
                })
            }
        }
    };
}

macro_rules! impl_from_value_float {
    ($ty:ty) => {
        impl FromValue for $ty {
            type Output = $ty;

            fn from_value(v: &Value) -> Result<Self::Output> {
                let out = match v {
                    Value::F32(v) => Some(*v as $ty),
                    Value::F64(v) => Some(*v as $ty),
                    Value::I64(v) => Some(*v as $ty),
                    Value::U64(v) => Some(*v as $ty),
                    Value::Str(s) => s.trim().parse::<$ty>().ok(),
                    Value::Bytes(b) => std::str::from_utf8(b)
                        .ok()
                        .and_then(|s| s.trim().parse::<$ty>().ok()),
                    _ => None,
                };

                out.ok_or_else(|| {
                    sqlchain_error::from_value!(
                        "Invalid value: {:?}, output type: {}",
                        v,
                        stringify!($ty)
                    )
                })
            }
        }
    };
}

/// Column value of a result row
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
    Bytes(Vec<u8>),
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

pub trait FromValue {
    type Output;

    fn from_value(v: &Value) -> Result<Self::Output>;
}

impl<T: FromValue> FromValue for Option<T> {
    type Output = Option<<T as FromValue>::Output>;

    fn from_value(v: &Value) -> Result<Self::Output> {
        match v {
            Value::Null => Ok(None),
            _ => Ok(Some(T::from_value(v)?)),
        }
    }
}

impl FromValue for bool {
    type Output = bool;

    fn from_value(v: &Value) -> Result<Self::Output> {
        match v {
            Value::Bool(v) => Ok(*v),
            Value::I64(v) => Ok(*v != 0),
            Value::U64(v) => Ok(*v != 0),
            _ => Ok(i64::from_value(v)? != 0),
        }
    }
}

impl FromValue for String {
    type Output = String;

    fn from_value(v: &Value) -> Result<Self::Output> {
        match v {
            Value::Str(s) => Ok(s.clone()),
            Value::Bytes(b) => String::from_utf8(b.clone())
                .map_err(|e| sqlchain_error::from_value!("Invalid utf8 string: {}", e)),
            Value::I64(v) => Ok(v.to_string()),
            Value::U64(v) => Ok(v.to_string()),
            _ => Err(sqlchain_error::from_value!(
                "Invalid value: {:?}, output type: {}",
                v,
                stringify!(String)
            )),
        }
    }
}

impl FromValue for Vec<u8> {
    type Output = Vec<u8>;

    fn from_value(v: &Value) -> Result<Self::Output> {
        match v {
            Value::Bytes(b) => Ok(b.clone()),
            Value::Str(s) => Ok(s.clone().into_bytes()),
            _ => Err(sqlchain_error::from_value!(
                "Invalid value: {:?}, output type: {}",
                v,
                stringify!(Vec<u8>)
            )),
        }
    }
}

impl_from_value_integer! {u8}
impl_from_value_integer! {i8}
impl_from_value_integer! {u16}
impl_from_value_integer! {i16}
impl_from_value_integer! {u32}
impl_from_value_integer! {i32}
impl_from_value_integer! {u64}
impl_from_value_integer! {i64}

impl_from_value_float! {f32}
impl_from_value_float! {f64}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_integer() {
        assert_eq!(u32::from_value(&Value::I64(5)).unwrap(), 5);
        assert_eq!(i64::from_value(&Value::Bytes(b"42".to_vec())).unwrap(), 42);
        assert!(u8::from_value(&Value::I64(300)).is_err());
        assert!(u8::from_value(&Value::I64(-1)).is_err());
        assert!(i32::from_value(&Value::Null).is_err());
    }

    #[test]
    fn test_string() {
        assert_eq!(String::from_value(&Value::Bytes(b"users".to_vec())).unwrap(), "users");
        assert_eq!(String::from_value(&"posts".into()).unwrap(), "posts");
        assert!(String::from_value(&Value::Bytes(vec![0xff, 0xfe])).is_err());
    }

    #[test]
    fn test_option() {
        assert_eq!(Option::<String>::from_value(&Value::Null).unwrap(), None);
        assert_eq!(Option::<i64>::from_value(&Value::U64(1)).unwrap(), Some(1));
    }

    #[test]
    fn test_bool() {
        assert!(bool::from_value(&Value::Bytes(b"1".to_vec())).unwrap());
        assert!(!bool::from_value(&Value::I64(0)).unwrap());
    }
}
