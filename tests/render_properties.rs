//! Property tests for rendering and call-level ordering.

use printly::{print_args, Arg, MemorySink, Render};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn rendered(value: &dyn Render) -> String {
    let sink = MemorySink::new();
    value.render(&sink).unwrap();
    sink.contents()
}

proptest! {
    #[test]
    fn sequences_render_as_bracketed_join(values in prop::collection::vec(any::<i64>(), 0..20)) {
        let expected = format!(
            "[{}]",
            values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        prop_assert_eq!(rendered(&values), expected);
    }

    #[test]
    fn ordered_sets_render_ascending_and_deduplicated(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let set: BTreeSet<i32> = values.iter().copied().collect();
        let expected = format!(
            "{{{}}}",
            set.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        prop_assert_eq!(rendered(&set), expected);
    }

    #[test]
    fn print_output_is_objects_joined_by_sep_plus_end(
        objects in prop::collection::vec(any::<u32>(), 0..8),
        sep in "[ ,;|-]{0,3}",
        end in "[!.\n]{0,2}",
    ) {
        let sink = MemorySink::new();
        let mut args: Vec<Arg<'_>> = objects.iter().map(|o| Arg::value(o)).collect();
        args.push(Arg::sep(&sep));
        args.push(Arg::end(&end));
        args.push(Arg::file(&sink));

        print_args(&args).unwrap();

        let expected = format!(
            "{}{}",
            objects
                .iter()
                .map(|o| o.to_string())
                .collect::<Vec<_>>()
                .join(&sep),
            end
        );
        prop_assert_eq!(sink.contents(), expected);
    }

    #[test]
    fn scalars_render_in_display_form(value in any::<i64>()) {
        prop_assert_eq!(rendered(&value), value.to_string());
    }

    #[test]
    fn nested_sequences_compose(rows in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..5), 0..5)) {
        let expected = format!(
            "[{}]",
            rows.iter()
                .map(|row| {
                    format!(
                        "[{}]",
                        row.iter()
                            .map(|v| v.to_string())
                            .collect::<Vec<_>>()
                            .join(", ")
                    )
                })
                .collect::<Vec<_>>()
                .join(", ")
        );
        prop_assert_eq!(rendered(&rows), expected);
    }
}
