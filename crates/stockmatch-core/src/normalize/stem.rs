//! Porter suffix-stripping stemmer.
//!
//! An implementation of M.F. Porter's 1980 algorithm ("An algorithm for
//! suffix stripping"), with the two well-known departures of the reference
//! C release: `bli -> ble` replaces `abli -> able` in step 2, and `logi ->
//! log` is added.
//!
//! The stemmer does **not** lowercase. Only lowercase `a e i o u` (and `y`
//! after a consonant) count as vowels, so callers must lowercase first or the
//! rules silently stop firing. [`crate::normalize`] does exactly that.
//!
//! Words of one or two characters are returned unchanged.

/// Reduce an already-lowercased word to its Porter stem.
pub fn stem(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 2 {
        return word.to_string();
    }

    let mut stemmer = Stemmer::new(chars);
    stemmer.step1ab();
    if stemmer.k > 1 {
        stemmer.step1c();
        stemmer.step2();
        stemmer.step3();
        stemmer.step4();
        stemmer.step5();
    }
    stemmer.finish()
}

/// Working buffer.
///
/// `b[..k]` is the current word and `b[..j]` the stem left of the suffix most
/// recently matched by [`Stemmer::ends`]. Shortening the word only moves `k`,
/// so step 5 can still measure the stem it saw before dropping a final `e`.
struct Stemmer {
    b: Vec<char>,
    k: usize,
    j: usize,
}

impl Stemmer {
    fn new(b: Vec<char>) -> Self {
        let k = b.len();
        Self { b, k, j: k }
    }

    fn finish(mut self) -> String {
        self.b.truncate(self.k);
        self.b.into_iter().collect()
    }

    fn is_consonant(&self, i: usize) -> bool {
        match self.b[i] {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// Number of vowel-consonant sequences in `b[..j]`: the `m` in
    /// `[C](VC){m}[V]`.
    fn measure(&self) -> usize {
        (1..self.j)
            .filter(|&i| !self.is_consonant(i - 1) && self.is_consonant(i))
            .count()
    }

    fn vowel_in_stem(&self) -> bool {
        (0..self.j).any(|i| !self.is_consonant(i))
    }

    fn double_consonant(&self, i: usize) -> bool {
        i >= 1 && self.b[i] == self.b[i - 1] && self.is_consonant(i)
    }

    /// consonant-vowel-consonant ending at `i`, where the final consonant is
    /// not `w`, `x` or `y`.
    fn cvc(&self, i: usize) -> bool {
        if i < 2 || !self.is_consonant(i) || self.is_consonant(i - 1) || !self.is_consonant(i - 2)
        {
            return false;
        }
        !matches!(self.b[i], 'w' | 'x' | 'y')
    }

    fn last(&self) -> Option<char> {
        self.k.checked_sub(1).map(|i| self.b[i])
    }

    fn penultimate(&self) -> Option<char> {
        self.k.checked_sub(2).map(|i| self.b[i])
    }

    /// Does the word end with `suffix`? On success `j` marks the stem.
    fn ends(&mut self, suffix: &str) -> bool {
        let len = suffix.chars().count();
        if len > self.k {
            return false;
        }
        let start = self.k - len;
        if !self.b[start..self.k].iter().copied().eq(suffix.chars()) {
            return false;
        }
        self.j = start;
        true
    }

    fn set_to(&mut self, replacement: &str) {
        self.b.truncate(self.j);
        self.b.extend(replacement.chars());
        self.k = self.b.len();
    }

    fn replace_if_measured(&mut self, replacement: &str) {
        if self.measure() > 0 {
            self.set_to(replacement);
        }
    }

    /// Apply the first rule whose suffix matches; later rules are not tried
    /// even when the measure condition fails.
    fn apply_first(&mut self, rules: &[(&str, &str)]) {
        for (suffix, replacement) in rules {
            if self.ends(suffix) {
                self.replace_if_measured(replacement);
                return;
            }
        }
    }

    /// Plurals and -ed / -ing.
    fn step1ab(&mut self) {
        if self.last() == Some('s') {
            if self.ends("sses") {
                self.k -= 2;
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.penultimate() != Some('s') {
                self.k -= 1;
            }
        }

        if self.ends("eed") {
            if self.measure() > 0 {
                self.k -= 1;
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.k = self.j;
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_consonant(self.k - 1) {
                if !matches!(self.b[self.k - 1], 'l' | 's' | 'z') {
                    self.k -= 1;
                }
            } else {
                self.j = self.k;
                if self.measure() == 1 && self.cvc(self.k - 1) {
                    self.set_to("e");
                }
            }
        }
    }

    /// Terminal `y` becomes `i` when there is another vowel in the stem.
    fn step1c(&mut self) {
        if self.ends("y") && self.vowel_in_stem() {
            let last = self.k - 1;
            self.b[last] = 'i';
        }
    }

    /// Double suffixes collapse to single ones.
    fn step2(&mut self) {
        let rules: &[(&str, &str)] = match self.penultimate() {
            Some('a') => &[("ational", "ate"), ("tional", "tion")],
            Some('c') => &[("enci", "ence"), ("anci", "ance")],
            Some('e') => &[("izer", "ize")],
            Some('l') => &[
                ("bli", "ble"),
                ("alli", "al"),
                ("entli", "ent"),
                ("eli", "e"),
                ("ousli", "ous"),
            ],
            Some('o') => &[("ization", "ize"), ("ation", "ate"), ("ator", "ate")],
            Some('s') => &[
                ("alism", "al"),
                ("iveness", "ive"),
                ("fulness", "ful"),
                ("ousness", "ous"),
            ],
            Some('t') => &[("aliti", "al"), ("iviti", "ive"), ("biliti", "ble")],
            Some('g') => &[("logi", "log")],
            _ => return,
        };
        self.apply_first(rules);
    }

    /// -ic-, -full, -ness and friends.
    fn step3(&mut self) {
        let rules: &[(&str, &str)] = match self.last() {
            Some('e') => &[("icate", "ic"), ("ative", ""), ("alize", "al")],
            Some('i') => &[("iciti", "ic")],
            Some('l') => &[("ical", "ic"), ("ful", "")],
            Some('s') => &[("ness", "")],
            _ => return,
        };
        self.apply_first(rules);
    }

    /// Strip -ant, -ence etc. in context `<c>vcvc<v>`.
    fn step4(&mut self) {
        let suffixes: &[&str] = match self.penultimate() {
            Some('a') => &["al"],
            Some('c') => &["ance", "ence"],
            Some('e') => &["er"],
            Some('i') => &["ic"],
            Some('l') => &["able", "ible"],
            Some('n') => &["ant", "ement", "ment", "ent"],
            Some('o') => {
                let ion = self.ends("ion") && self.j >= 1 && matches!(self.b[self.j - 1], 's' | 't');
                if !ion && !self.ends("ou") {
                    return;
                }
                &[]
            }
            Some('s') => &["ism"],
            Some('t') => &["ate", "iti"],
            Some('u') => &["ous"],
            Some('v') => &["ive"],
            Some('z') => &["ize"],
            _ => return,
        };

        if !suffixes.is_empty() && !suffixes.iter().any(|suffix| self.ends(suffix)) {
            return;
        }
        if self.measure() > 1 {
            self.k = self.j;
        }
    }

    /// Drop a final `-e` and reduce `-ll` when the stem is long enough.
    fn step5(&mut self) {
        self.j = self.k;
        if self.last() == Some('e') {
            let m = self.measure();
            if m > 1 || (m == 1 && !(self.k >= 2 && self.cvc(self.k - 2))) {
                self.k -= 1;
            }
        }
        if self.last() == Some('l') && self.double_consonant(self.k - 1) && self.measure() > 1 {
            self.k -= 1;
        }
    }
}
