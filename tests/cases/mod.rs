// Helper macro to distinguish between patterns and expressions
#[macro_export]
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    // Pattern matching cases - detect common pattern forms
    ($result:expr, { Ok($($pattern:tt)*) }) => {
        match $result {
            Ok($($pattern)*) => {},
            other => panic!("Expected Ok({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Some($($pattern:tt)*) }) => {
        match $result {
            Some($($pattern)*) => {},
            other => panic!("Expected Some({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { None }) => {
        match $result {
            None => {},
            other => panic!("Expected None but got {:#?}", other),
        }
    };

    // Wildcard pattern
    ($result:expr, { _ }) => {
        // Always passes - just to ensure the expression compiles
        let _ = $result;
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        match $result {
            Ok(actual) => {
                pretty_assertions::assert_eq!($expected, actual, "Expected {:#?} but got {:#?}\n\n< expected / got >", $expected, actual);
            },
            other => panic!("Expected Ok(...) but got {:?}", other),
        }
    };
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    ([$($attrs:meta)*] rendered, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_rendered() {
            let result: Result<String, ()> = Ok(input().to_string());
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] slots, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_slots() {
            let result: Result<Vec<Option<i32>>, ()> = Ok(input().to_slots());
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] sorted, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_sorted() {
            let seq = input();
            seq.sort();
            let result: Result<String, ()> = Ok(seq.to_string());
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] sorted_numeric, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_sorted_numeric() {
            let seq = input();
            let result = seq
                .sort_by(|a, b| f64::from(a - b))
                .map(|sorted| sorted.to_string());
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] sum, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_sum() {
            let result = input().reduce(|a, b, _, _| a + b);
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] error, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_error() {
            // Normalize by stripping trailing whitespace from each line
            fn normalize(s: &str) -> String {
                s.lines()
                    .map(|line| line.trim_end())
                    .collect::<Vec<_>>()
                    .join("\n")
                    + "\n"
            }

            let err = match input().reduce(|a, b, _, _| a + b) {
                Err(e) => e,
                Ok(sum) => panic!("Expected reduce to fail, but it produced {sum}"),
            };
            let mut buf = Vec::new();
            let config = arrayish::RenderConfig { color: false, ..Default::default() };
            arrayish::render_error_to(&err, &mut buf, &config).unwrap();
            let normalized = normalize(&String::from_utf8_lossy(&buf));

            let result: Result<&str, ()> = Ok(normalized.as_str());
            assert_case!(result, $expected);
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    // Parse assertion field with potential attributes
    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, input second, then any order for assertions.
// `input` is evaluated afresh by every generated test.
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;

            fn input() -> arrayish::IndexedSequence<i32> {
                $input
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
