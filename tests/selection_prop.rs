use proptest::prelude::*;

use rusty_solvent::{SolventSelection, SolventVectorizer, SELECTABLE_DESCRIPTORS};

/// Build a selection from flags in canonical column order.
fn selection_from(flags: [bool; SELECTABLE_DESCRIPTORS]) -> SolventSelection {
    SolventSelection {
        polarizability_form1: flags[0],
        polarizability_form2: flags[1],
        permettivity_form1: flags[2],
        permettivity_form2: flags[3],
        permettivity_form3: flags[4],
        permettivity_form4: flags[5],
        permettivity_polarizability: flags[6],
        alpha_kamlet_taft: flags[7],
        beta_kamlet_taft: flags[8],
        pi_kamlet_taft: flags[9],
        spp_katalan: flags[10],
        sb_katalan: flags[11],
        sa_katalan: flags[12],
    }
}

proptest! {
    #[test]
    fn header_length_equals_true_count(
        mut flags in proptest::array::uniform13(any::<bool>()),
        forced in 0usize..SELECTABLE_DESCRIPTORS,
    ) {
        // Force at least one flag on so construction succeeds.
        flags[forced] = true;
        let true_count = flags.iter().filter(|f| **f).count();

        let vectorizer = SolventVectorizer::new(selection_from(flags)).unwrap();
        prop_assert_eq!(vectorizer.feature_names().len(), true_count);

        let frame = vectorizer.transform(&["water"]).unwrap();
        prop_assert_eq!(frame.len(), 1);
        prop_assert_eq!(frame.rows()[0].len(), true_count);
        prop_assert_eq!(frame.columns().len(), true_count);
    }

    #[test]
    fn all_false_always_rejected_via_update(
        mut flags in proptest::array::uniform13(any::<bool>()),
        forced in 0usize..SELECTABLE_DESCRIPTORS,
    ) {
        flags[forced] = true;
        let mut vectorizer = SolventVectorizer::new(selection_from(flags)).unwrap();

        let before = vectorizer.feature_names().to_vec();
        prop_assert!(vectorizer
            .set_selection(selection_from([false; SELECTABLE_DESCRIPTORS]))
            .is_err());
        prop_assert_eq!(vectorizer.feature_names(), &before[..]);
    }

    #[test]
    fn selection_survives_serde(
        mut flags in proptest::array::uniform13(any::<bool>()),
        forced in 0usize..SELECTABLE_DESCRIPTORS,
    ) {
        flags[forced] = true;
        let selection = selection_from(flags);

        let json = serde_json::to_string(&selection).unwrap();
        let restored: SolventSelection = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(restored, selection);
    }
}
