//! Four-level partition of the roster into opponent-eligible groups.

use super::categories::{AgeCategory, WeightClass, belt_order};
use super::models::CategoryKey;
use crate::roster::Competitor;

/// Partition competitors into groups keyed by (sex, belt, age category,
/// weight class).
///
/// Group order is deterministic for a given roster order: sexes by
/// first occurrence, belts by grading rank (ties and unknown belts by
/// first occurrence, unknown after all recognized), age categories in
/// fixed band order, weight classes by first occurrence. Members keep
/// their roster order within each group. No empty groups are emitted.
pub fn partition(competitors: &[Competitor]) -> Vec<(CategoryKey, Vec<Competitor>)> {
    let mut groups = Vec::new();

    for (sex, of_sex) in partition_by(competitors, |c| c.sex) {
        let mut by_belt = partition_by(&of_sex, |c| c.belt.clone());
        // Stable sort keeps first-occurrence order between equal ranks
        by_belt.sort_by_key(|(belt, _)| belt_order(belt));

        for (belt, of_belt) in by_belt {
            let mut by_age = partition_by(&of_belt, |c| AgeCategory::for_age(c.age));
            by_age.sort_by_key(|(age_category, _)| *age_category);

            for (age_category, of_age) in by_age {
                let by_weight =
                    partition_by(&of_age, |c| WeightClass::for_weight(c.weight, c.sex));

                for (weight_class, members) in by_weight {
                    let key = CategoryKey {
                        sex,
                        belt: belt.clone(),
                        age_category,
                        weight_class,
                    };
                    groups.push((key, members));
                }
            }
        }
    }

    groups
}

/// Split items into (key, bucket) pairs.
///
/// Buckets appear in order of their key's first occurrence and items
/// keep their input order within each bucket.
fn partition_by<T, K, F>(items: &[T], key_of: F) -> Vec<(K, Vec<T>)>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut buckets: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let key = key_of(item);
        match buckets.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, bucket)) => bucket.push(item.clone()),
            None => buckets.push((key, vec![item.clone()])),
        }
    }
    buckets
}
