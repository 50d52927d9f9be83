/// Joins the given slices into one vector, in argument order.
pub fn concatenate_arrays<T: Clone>(arrays: &[&[T]]) -> Vec<T> {
    let total = arrays.iter().map(|a| a.len()).sum();
    let mut out = Vec::with_capacity(total);
    for array in arrays {
        out.extend_from_slice(array);
    }
    tracing::debug!("Concatenated {} arrays into {} elements", arrays.len(), out.len());
    out
}

pub fn concatenate_owned<T, I>(arrays: I) -> Vec<T>
where
    I: IntoIterator<Item = Vec<T>>,
{
    arrays.into_iter().flatten().collect()
}

/// Variadic form of [`concatenate_arrays`]: `concat_arrays!(&a, &b, &[])`.
#[macro_export]
macro_rules! concat_arrays {
    () => {
        ::std::vec::Vec::new()
    };
    ($($array:expr),+ $(,)?) => {
        $crate::core::sequences::concatenate_arrays(&[$(&$array[..]),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenate_preserves_order() {
        let a = [1, 2];
        let b = [3];
        let c: [i32; 0] = [];
        assert_eq!(concatenate_arrays(&[&a[..], &b[..], &c[..]]), vec![1, 2, 3]);
        assert_eq!(concatenate_arrays(&[&b[..], &a[..]]), vec![3, 1, 2]);
    }

    #[test]
    fn test_concatenate_nothing() {
        let none: Vec<i32> = concatenate_arrays(&[]);
        assert!(none.is_empty());
        let none: Vec<String> = crate::concat_arrays!();
        assert!(none.is_empty());
    }

    #[test]
    fn test_macro_and_owned_variant() {
        let words = vec!["a".to_string(), "b".to_string()];
        let more = vec!["c".to_string()];
        let joined: Vec<String> = crate::concat_arrays!(words, more, Vec::<String>::new());
        assert_eq!(joined, vec!["a", "b", "c"]);

        assert_eq!(concatenate_owned(vec![vec![1], vec![], vec![2, 3]]), vec![1, 2, 3]);
    }
}
