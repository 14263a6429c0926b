use std::iter::FromIterator;

pub type BitmapWord = u32;

pub const BITS_PER_WORD: usize = BitmapWord::BITS as usize;

/// A set of small non-negative integers, packed into words.
///
/// The word vector only ever grows; removing the highest member leaves trailing zero words in
/// place. The wire form carries the words verbatim, so its size follows the highest member
/// ever added, not the cardinality.
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct Bitmapset {
    words: Vec<BitmapWord>,
}

impl Bitmapset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words(words: Vec<BitmapWord>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[BitmapWord] {
        &self.words
    }

    pub fn add_member(&mut self, x: usize) {
        let (wordnum, bitnum) = (x / BITS_PER_WORD, x % BITS_PER_WORD);
        if wordnum >= self.words.len() {
            self.words.resize(wordnum + 1, 0);
        }
        self.words[wordnum] |= 1 << bitnum;
    }

    pub fn del_member(&mut self, x: usize) {
        let (wordnum, bitnum) = (x / BITS_PER_WORD, x % BITS_PER_WORD);
        if let Some(word) = self.words.get_mut(wordnum) {
            *word &= !(1 << bitnum);
        }
    }

    pub fn is_member(&self, x: usize) -> bool {
        let (wordnum, bitnum) = (x / BITS_PER_WORD, x % BITS_PER_WORD);
        match self.words.get(wordnum) {
            None => false,
            Some(word) => word & (1 << bitnum) != 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Members in ascending order.
    pub fn members(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wordnum, word)| {
            let word = *word;
            (0..BITS_PER_WORD)
                .filter(move |bitnum| word & (1 << bitnum) != 0)
                .map(move |bitnum| wordnum * BITS_PER_WORD + bitnum)
        })
    }
}

impl FromIterator<usize> for Bitmapset {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut bms = Self::new();
        for x in iter {
            bms.add_member(x);
        }
        bms
    }
}
