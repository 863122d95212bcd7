use crate::cards::Card;

static EXCLUDE_NONE_OF_FIVE: [&[usize]; 1] = [&[]];

/// Indices to drop from a 6-card hand to leave each of its 6 five-card hands.
static EXCLUDE_ONE_OF_SIX: [&[usize]; 6] = [&[0], &[1], &[2], &[3], &[4], &[5]];

/// Index pairs to drop from a 7-card hand to leave each of its 21 five-card hands.
#[rustfmt::skip]
static EXCLUDE_TWO_OF_SEVEN: [&[usize]; 21] = [
    &[0, 1], &[0, 2], &[0, 3], &[0, 4], &[0, 5], &[0, 6],
             &[1, 2], &[1, 3], &[1, 4], &[1, 5], &[1, 6],
                      &[2, 3], &[2, 4], &[2, 5], &[2, 6],
                               &[3, 4], &[3, 5], &[3, 6],
                                        &[4, 5], &[4, 6],
                                                 &[5, 6],
];

/// The exclusion sets that reduce an `n`-card hand to five cards.
///
/// Five cards need no exclusion (a single empty set); anything other than
/// 5, 6 or 7 cards has no five-card subsets we care about.
pub fn exclusions(n: usize) -> &'static [&'static [usize]] {
    match n {
        5 => &EXCLUDE_NONE_OF_FIVE,
        6 => &EXCLUDE_ONE_OF_SIX,
        7 => &EXCLUDE_TWO_OF_SEVEN,
        _ => &[],
    }
}

/// The five cards left after dropping the `excluded` indices.
pub fn induce(cards: &[Card], excluded: &[usize]) -> [Card; 5] {
    debug_assert!(cards.len() - excluded.len() == 5);
    let mut five = [cards[0]; 5];
    cards
        .iter()
        .enumerate()
        .filter(|(i, _)| !excluded.contains(i))
        .map(|(_, card)| *card)
        .zip(five.iter_mut())
        .for_each(|(card, slot)| *slot = card);
    five
}
