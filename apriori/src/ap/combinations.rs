use super::itemset::Item;

/// Calls `callback` with every `k`-combination of `items`, in lexicographic
/// order of positions. The callback returns `false` to stop early.
pub fn for_each_combination<F>(items: &[Item], k: usize, callback: &mut F)
where
    F: FnMut(&[Item]) -> bool,
{
    if k == 0 || k > items.len() {
        return;
    }
    let mut current = Vec::with_capacity(k);
    generate_combinations_recursive(items, k, 0, &mut current, callback);
}

fn generate_combinations_recursive<F>(
    items: &[Item],
    k: usize,
    start: usize,
    current: &mut Vec<Item>,
    callback: &mut F,
) -> bool
where
    F: FnMut(&[Item]) -> bool,
{
    if current.len() == k {
        return callback(current);
    }

    // not enough items left to fill the remaining slots
    let needed = k - current.len();
    for i in start..=items.len() - needed {
        current.push(items[i]);
        let keep_going = generate_combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
        if !keep_going {
            return false;
        }
    }
    true
}

/// `n choose k`, or `None` on overflow.
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * (n - i) as u128 / (i + 1) as u128;
        if acc > usize::MAX as u128 {
            return None;
        }
    }
    usize::try_from(acc).ok()
}
