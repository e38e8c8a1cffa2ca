#![allow(missing_docs)]

use float_cmp::approx_eq;
use pairwise_aligners::{global_alignment, needleman_wunsch, smith_waterman, Scheme, SubstitutionMatrix};

#[test]
fn scheme_from_json() -> Result<(), String> {
    let json = r#"{ "match_score": 2.5, "mismatch_score": -1.25, "gap_score": -2.0 }"#;
    let scheme: Scheme<f64> = serde_json::from_str(json).map_err(|e| e.to_string())?;
    assert_eq!(scheme, Scheme::new(2.5, -1.25, -2.0));

    let round_trip: Scheme<f64> =
        serde_json::from_str(&serde_json::to_string(&scheme).map_err(|e| e.to_string())?).map_err(|e| e.to_string())?;
    assert_eq!(round_trip, scheme);

    Ok(())
}

#[test]
fn fractional_scores() -> Result<(), String> {
    let scheme = Scheme::new(0.7_f64, -0.3, -0.45);
    let aligner = needleman_wunsch::Aligner::new(&scheme, b'-');

    let x = b"NAJIBPEPPERSEATS";
    let y = b"NAJIBEATSPEPPERS";
    let aln = aligner.align::<f64>(x, y).map_err(|e| e.to_string())?;
    assert!(approx_eq!(f64, aln.rescore(&scheme, b'-'), aln.score(), epsilon = 1e-9));
    assert!(approx_eq!(
        f64,
        aligner.score::<f64>(x, y).map_err(|e| e.to_string())?,
        aln.score(),
        epsilon = 1e-9
    ));

    let aligner = smith_waterman::Aligner::new(&scheme, b'-');
    let aln = aligner.align::<f64>(x, y).map_err(|e| e.to_string())?;
    assert!(aln.score() > 0.0);
    assert!(approx_eq!(f64, aln.rescore(&scheme, b'-'), aln.score(), epsilon = 1e-9));

    Ok(())
}

#[test]
fn substitution_matrix_changes_the_alignment() -> Result<(), String> {
    // Purines substitute cheaply for each other.
    let matrix = SubstitutionMatrix::<i16>::new(2, -3, -2)
        .with_sub_score(b'A', b'G', 1)
        .with_sub_score(b'G', b'A', 1);
    let aligner = needleman_wunsch::Aligner::new(&matrix, b'-');

    let aln = aligner.align::<i16>(b"CAT", b"CGT").map_err(|e| e.to_string())?;
    assert_eq!(aln.x(), b"CAT");
    assert_eq!(aln.y(), b"CGT");
    assert_eq!(aln.score(), 5);

    let plain = SubstitutionMatrix::<i16>::new(2, -3, -2);
    let aligner = needleman_wunsch::Aligner::new(&plain, b'-');
    let aln = aligner.align::<i16>(b"CAT", b"CGT").map_err(|e| e.to_string())?;
    assert_eq!(aln.score(), 1);
    assert_eq!(aln.len(), 3);

    Ok(())
}

#[test]
fn identity_of_string_alignment() -> Result<(), String> {
    let (x, y, score) = global_alignment("GATTACA", "GATTACA", |a, b| if a == b { 1_i64 } else { -1 })
        .map_err(|e| e.to_string())?;
    assert_eq!(x, y);
    assert_eq!(score, 7);

    let scheme = Scheme::<i64>::default();
    let aln = needleman_wunsch::Aligner::new(&scheme, b'-')
        .align::<i64>(b"GATTACA", b"GACTACA")
        .map_err(|e| e.to_string())?;
    assert!(approx_eq!(f64, aln.identity(b'-'), 6.0 / 7.0, ulps = 2));

    Ok(())
}

#[test]
fn unsigned_scores_with_free_gaps() -> Result<(), String> {
    let scheme = Scheme::<u32>::new(2, 0, 0);
    let (x, y) = (b"GATTACA", b"GCATGCU");

    let global = needleman_wunsch::Aligner::new(&scheme, b'-');
    let aln = global.align::<u32>(x, y).map_err(|e| e.to_string())?;
    assert_eq!(aln.score(), 8);
    assert_eq!(aln.rescore(&scheme, b'-'), 8);
    assert_eq!(aln.ungapped(b'-'), [x.to_vec(), y.to_vec()]);
    assert_eq!(global.score::<u32>(x, y).map_err(|e| e.to_string())?, 8);

    let local = smith_waterman::Aligner::new(&scheme, b'-');
    let aln = local.align::<u32>(x, y).map_err(|e| e.to_string())?;
    assert_eq!(aln.score(), 8);
    assert_eq!(aln.rescore(&scheme, b'-'), 8);
    assert_eq!(local.score::<u32>(x, y).map_err(|e| e.to_string())?, 8);

    let matrix = SubstitutionMatrix::<u8>::new(2, 0, 0);
    let aln = needleman_wunsch::Aligner::new(&matrix, b'-')
        .align::<u8>(x, y)
        .map_err(|e| e.to_string())?;
    assert_eq!(aln.score(), 8);

    Ok(())
}
