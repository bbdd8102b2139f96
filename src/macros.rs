#[macro_export]
macro_rules! rson {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty list
    ([]) => {
        $crate::Value::List(vec![])
    };

    // Handle non-empty list
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::rson!($elem)),*])
    };

    // Handle empty record
    ({}) => {
        $crate::Value::Record($crate::RsonMap::new())
    };

    // Handle non-empty record
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut record = $crate::RsonMap::new();
        $(
            record.insert($key.to_string(), $crate::rson!($value));
        )*
        $crate::Value::Record(record)
    }};

    // Fallback: anything `Value: From` accepts
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{RsonMap, Value};

    #[test]
    fn rson_macro_primitives() {
        assert_eq!(rson!(null), Value::Null);
        assert_eq!(rson!(true), Value::Bool(true));
        assert_eq!(rson!(false), Value::Bool(false));
        assert_eq!(rson!(42), Value::Int(42));
        assert_eq!(rson!(3.5), Value::Float(3.5));
        assert_eq!(rson!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn rson_macro_lists() {
        assert_eq!(rson!([]), Value::List(vec![]));

        let list = rson!([1, 2, 3]);
        match list {
            Value::List(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0], Value::Int(1));
                assert_eq!(items[2], Value::Int(3));
            }
            _ => panic!("Expected list"),
        }

        let nested = rson!([[1], []]);
        assert_eq!(
            nested,
            Value::List(vec![Value::List(vec![Value::Int(1)]), Value::List(vec![])])
        );
    }

    #[test]
    fn rson_macro_records() {
        assert_eq!(rson!({}), Value::Record(RsonMap::new()));

        let record = rson!({
            "name": "Alice",
            "age": 30
        });

        match record {
            Value::Record(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Int(30)));
            }
            _ => panic!("Expected record"),
        }
    }

    #[test]
    fn rson_macro_matches_parser_output() {
        let built = rson!({"xs": [1, 2.5, "three"], "ok": true});
        let parsed = crate::parse_str("{\"xs\": [1, 2.5, \"three\"], \"ok\": true}").unwrap();
        assert_eq!(built, parsed);
    }
}
