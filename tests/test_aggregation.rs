use watchlist_be::models::Title;

#[test]
fn test_first_review_sets_average_to_rating() {
    let (avg, count) = Title::fold_rating(0.0, 0, 5);
    assert_eq!(avg, 5.0);
    assert_eq!(count, 1);

    let (avg, count) = Title::fold_rating(0.0, 0, 1);
    assert_eq!(avg, 1.0);
    assert_eq!(count, 1);
}

#[test]
fn test_second_review_averages_with_previous() {
    // avg 5 with one rating, then a 3 comes in: (5 + 3) / 2 = 4
    let (avg, count) = Title::fold_rating(5.0, 1, 3);
    assert_eq!(avg, 4.0);
    assert_eq!(count, 2);
}

#[test]
fn test_recurrence_weights_old_average_as_one_sample() {
    // Ratings 5, 3, 4. The true mean is 4, but the shipped rule folds the
    // previous average in as if it were a single rating:
    // (4 + 4) / 3 = 2.666...
    let (avg, count) = Title::fold_rating(5.0, 1, 3);
    let (avg, count) = Title::fold_rating(avg, count, 4);

    assert_eq!(count, 3);
    assert!((avg - 8.0 / 3.0).abs() < 1e-9);
    assert!(avg != 4.0);
}

#[test]
fn test_count_always_increments_by_one() {
    let mut avg = 0.0;
    let mut count = 0;
    for rating in [2, 4, 5, 1, 3] {
        let (new_avg, new_count) = Title::fold_rating(avg, count, rating);
        assert_eq!(new_count, count + 1);
        avg = new_avg;
        count = new_count;
    }
    assert_eq!(count, 5);
}
