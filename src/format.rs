use crate::{component_names, Scalar, Vector};
use core::fmt;

/// Text form of a vector, one `<label>: <value>` entry per component.
///
/// Labels are the component letters for arities 2 to 4 and zero-based indices
/// otherwise. Created by [`Vector::labeled`].
#[derive(Copy, Clone, Debug)]
pub struct Labeled<'a, T, const N: usize> {
    vector: &'a Vector<T, N>,
    name: Option<&'a str>,
    line_breaks: bool,
}

impl<'a, T, const N: usize> Labeled<'a, T, N> {
    /// Prefixes the output with `name`.
    #[inline]
    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Separates entries with `'\n'` (the default) or with a single space.
    #[inline]
    pub fn line_breaks(mut self, line_breaks: bool) -> Self {
        self.line_breaks = line_breaks;
        self
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Labeled<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.line_breaks { "\n" } else { " " };
        if let Some(name) = self.name {
            f.write_str(name)?;
            f.write_str(if self.line_breaks { "\n" } else { "  " })?;
        }

        let names = component_names(N);
        for (i, value) in self.vector.iter().enumerate() {
            match names.and_then(|names| names.get(i..i + 1)) {
                Some(label) => write!(f, "{}: {}{}", label, value, separator)?,
                None => write!(f, "{}: {}{}", i, value, separator)?,
            }
        }
        Ok(())
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    #[inline]
    pub fn labeled(&self) -> Labeled<'_, T, N> {
        Labeled {
            vector: self,
            name: None,
            line_breaks: true,
        }
    }

    pub fn to_labeled_string(&self, name: Option<&str>, line_breaks: bool) -> String {
        let mut labeled = self.labeled().line_breaks(line_breaks);
        labeled.name = name;
        labeled.to_string()
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.labeled(), f)
    }
}

#[cfg(test)]
mod test {
    use crate::{vec2, vec4, Vector};
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_labeled() {
        let v = vec2(1u32, 2);
        assert_eq!(v.to_string(), "x: 1\ny: 2\n");
        assert_eq!(v.labeled().line_breaks(false).to_string(), "x: 1 y: 2 ");
        assert_eq!(v.labeled().name("asdf").line_breaks(false).to_string(), "asdf  x: 1 y: 2 ");
        assert_eq!(v.labeled().name("asdf").to_string(), "asdf\nx: 1\ny: 2\n");

        assert_eq!(v.to_labeled_string(None, true), v.to_string());
        assert_eq!(v.to_labeled_string(Some("asdf"), false), "asdf  x: 1 y: 2 ");
    }

    #[test]
    fn test_labels() {
        assert_eq!(vec4(0.5f32, -1.0, 2.25, 0.0).labeled().line_breaks(false).to_string(), "x: 0.5 y: -1 z: 2.25 w: 0 ");

        let v = Vector::<i64, 5>::from([1, 2, 3, 4, 5]);
        assert_eq!(v.labeled().line_breaks(false).to_string(), "0: 1 1: 2 2: 3 3: 4 4: 5 ");
    }

    #[test]
    fn test_display_ends_with_line_break() {
        let mut rng = rand_pcg::Pcg32::seed_from_u64(0x7465_7874);
        for _ in 0..20 {
            let v = Vector::<f64, 3>::from_fn(|_| rng.gen_range(-1.0e6..1.0e6));
            let text = v.to_string();
            println!("{}", text);
            assert!(text.ends_with('\n'));
            assert_eq!(text.lines().count(), 3);
        }
    }
}
