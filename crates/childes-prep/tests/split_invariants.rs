use childes_prep::{
    FileUtterance,
    FileUtterances,
    Partition,
    PrepError,
    SplitRatio,
    splits::{
        Shuffler,
        batch_split,
        find_file_boundary,
        hold_out,
        remix_held_out,
        shuffle_files,
    },
    types::{flatten_files, group_by_file, utterance_from_str},
};
use proptest::prelude::*;

/// Build `files[i]` with `sizes[i].0` utterances, the first `sizes[i].1` of them questions.
fn build_files(sizes: &[(usize, usize)]) -> Vec<FileUtterances> {
    sizes
        .iter()
        .enumerate()
        .map(|(i, &(n, q))| {
            let id = format!("corpus/f{i:03}.xml");
            let utts = (0..n)
                .map(|j| {
                    let end = if j < q { "?" } else { "." };
                    utterance_from_str(&format!("{id} {j} {end}"))
                })
                .collect();
            FileUtterances::new(id, utts)
        })
        .collect()
}

fn file_sizes() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((1usize..8).prop_flat_map(|n| (Just(n), 0..=n)), 0..60)
}

fn ratios() -> impl Strategy<Value = SplitRatio> {
    (0usize..6, 0usize..6, 0usize..6)
        .prop_filter("non-zero batch", |(a, b, c)| a + b + c > 0)
        .prop_map(|(train, valid, test)| {
            SplitRatio::new([
                (Partition::Train, train),
                (Partition::Valid, valid),
                (Partition::Test, test),
            ])
            .unwrap()
        })
}

fn sorted(mut pairs: Vec<FileUtterance>) -> Vec<FileUtterance> {
    pairs.sort();
    pairs
}

proptest! {
    #[test]
    fn batch_split_covers_every_file_once(
        sizes in file_sizes(),
        ratio in ratios(),
        seed in any::<u64>(),
        shuffle in any::<bool>(),
    ) {
        let files = build_files(&sizes);
        let splits = batch_split(&files, &ratio, &mut Shuffler::new(shuffle, seed));

        prop_assert!(splits.excluded.is_empty());

        let mut all = splits.train.clone();
        all.extend(splits.valid.iter().cloned());
        all.extend(splits.test.iter().cloned());
        prop_assert_eq!(sorted(all), sorted(flatten_files(&files)));

        // File atomicity: no file owns pairs in two partitions.
        for file in &files {
            let owners = [&splits.train, &splits.valid, &splits.test]
                .iter()
                .filter(|pairs| pairs.iter().any(|(f, _)| *f == file.file_id))
                .count();
            prop_assert_eq!(owners, 1);
        }

        // Each partition keeps whole files in their original order.
        for pairs in [&splits.train, &splits.valid, &splits.test] {
            for grouped in group_by_file(pairs.clone()) {
                let original = files.iter().find(|f| f.file_id == grouped.file_id).unwrap();
                prop_assert_eq!(&grouped, original);
            }
        }
    }

    #[test]
    fn hold_out_is_a_deterministic_partition(
        sizes in file_sizes(),
        k in 1usize..12,
    ) {
        let files = build_files(&sizes);

        let a = hold_out(files.clone(), k).unwrap();
        let b = hold_out(files.clone(), k).unwrap();
        prop_assert_eq!(&a, &b);

        prop_assert_eq!(a.excluded.len(), files.len().div_ceil(k));

        let mut rejoined = a.included.clone();
        rejoined.extend(a.excluded.iter().cloned());
        rejoined.sort_by(|x, y| x.file_id.cmp(&y.file_id));
        prop_assert_eq!(rejoined, files);
    }

    #[test]
    fn remix_preserves_size_and_file_boundaries(
        test_sizes in prop::collection::vec(1usize..6, 1..20),
        excluded_size in 0usize..30,
    ) {
        let test = flatten_files(&build_files(
            &test_sizes.iter().map(|&n| (n, 0)).collect::<Vec<_>>(),
        ));
        let valid: Vec<FileUtterance> = vec![("valid/v.xml".to_string(), utterance_from_str("v"))];
        let excluded: Vec<FileUtterance> = (0..excluded_size)
            .map(|i| (format!("Brown/x{}.xml", i / 3), utterance_from_str("x")))
            .collect();

        let before = valid.len() + test.len() + excluded.len();
        match remix_held_out(valid.clone(), test.clone(), excluded.clone()) {
            Ok((new_valid, new_test)) => {
                prop_assert_eq!(new_valid.len() + new_test.len(), before);
                prop_assert!(new_test.ends_with(&excluded));
                prop_assert!(new_valid.starts_with(&valid));

                let moved = new_valid.len() - valid.len();
                prop_assert!(moved <= excluded_size / 2);
                if moved > 0 {
                    let cut = test.len() - moved;
                    prop_assert_ne!(&test[cut - 1].0, &test[cut].0);
                }
            }
            Err(PrepError::RemixBoundaryNotFound { .. }) => {
                let target = test.len() - excluded_size / 2;
                prop_assert_eq!(find_file_boundary(&test, target), None);
            }
            Err(PrepError::RemixTestTooSmall { .. }) => {
                prop_assert!(test.len() < excluded_size / 2);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn shuffle_files_keeps_pairs_and_grouping(
        sizes in file_sizes(),
        seed in any::<u64>(),
    ) {
        let pairs = flatten_files(&build_files(&sizes));
        let shuffled = shuffle_files(pairs.clone(), &mut Shuffler::seeded(seed));

        prop_assert_eq!(group_by_file(shuffled.clone()).len(), sizes.len());
        prop_assert_eq!(sorted(shuffled), sorted(pairs));
    }
}

#[test]
fn hold_out_every_second_file() {
    let files = vec![
        FileUtterances::new("A", vec![utterance_from_str("x"), utterance_from_str("y y")]),
        FileUtterances::new("B", vec![utterance_from_str("z z z")]),
        FileUtterances::new("C", vec![utterance_from_str("w")]),
    ];

    let held = hold_out(files, 2).unwrap();
    let ids = |fs: &[FileUtterances]| fs.iter().map(|f| f.file_id.clone()).collect::<Vec<_>>();

    // Sorted positions 0 and 2 are held out.
    assert_eq!(ids(&held.excluded), vec!["A", "C"]);
    assert_eq!(ids(&held.included), vec!["B"]);
}

#[test]
fn batch_split_two_one_one() {
    let files: Vec<_> = ["a", "b", "c", "d"]
        .iter()
        .map(|id| FileUtterances::new(*id, vec![utterance_from_str(id)]))
        .collect();
    let ratio: SplitRatio = "train=2,valid=1,test=1".parse().unwrap();

    let splits = batch_split(&files, &ratio, &mut Shuffler::disabled());

    assert_eq!(splits.train, flatten_files(&files[0..2]));
    assert_eq!(splits.valid, flatten_files(&files[2..3]));
    assert_eq!(splits.test, flatten_files(&files[3..4]));
}

#[test]
fn remix_on_distinct_tail_files() {
    let valid = vec![("v".to_string(), utterance_from_str("v"))];
    let test: Vec<FileUtterance> = ["t0", "t0", "t1", "t2"]
        .iter()
        .map(|f| (f.to_string(), utterance_from_str(f)))
        .collect();
    let excluded: Vec<FileUtterance> = (0..4)
        .map(|i| (format!("x{i}"), utterance_from_str("x")))
        .collect();

    let (new_valid, new_test) = remix_held_out(valid, test.clone(), excluded.clone()).unwrap();

    assert_eq!(new_valid.len(), 3);
    assert_eq!(&new_valid[1..], &test[2..]);

    let mut expected = test[..2].to_vec();
    expected.extend(excluded);
    assert_eq!(new_test, expected);
}
