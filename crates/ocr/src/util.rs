/// Insertion/deletion edit distance (no substitutions), computed from the
/// longest common subsequence with the two-row algorithm. Works on chars.
pub fn indel_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let (m, n) = (a.len(), b.len());

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Rows sized by the shorter string.
    let (outer, inner) = if m >= n { (&a, &b) } else { (&b, &a) };

    let mut prev = vec![0usize; inner.len() + 1];
    let mut curr = vec![0usize; inner.len() + 1];

    for &x in outer.iter() {
        curr[0] = 0;
        for (j, &y) in inner.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let lcs = prev[inner.len()];
    m + n - 2 * lcs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_are_zero() {
        assert_eq!(indel_distance("abc", "abc"), 0);
        assert_eq!(indel_distance("", ""), 0);
    }

    #[test]
    fn empty_string_is_length_of_other() {
        assert_eq!(indel_distance("", "abc"), 3);
        assert_eq!(indel_distance("abc", ""), 3);
    }

    #[test]
    fn substitution_costs_two() {
        assert_eq!(indel_distance("surgeon", "surgaon"), 2);
    }

    #[test]
    fn single_insertion() {
        assert_eq!(indel_distance("abc", "abcd"), 1);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(indel_distance("café", "cafe"), 2);
    }

    #[test]
    fn commutative() {
        assert_eq!(indel_distance("bourbon", "bourborn"), indel_distance("bourborn", "bourbon"));
    }
}
