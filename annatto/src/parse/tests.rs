use rstest::rstest;

use super::*;
use crate::data_structs::enums::Strand;
use crate::error::Error;

fn lines(input: &[&str]) -> Vec<String> {
    input.iter().map(|s| s.to_string()).collect()
}

mod splitter {
    use super::*;

    fn split(input: &[&str]) -> Vec<crate::error::Result<Vec<String>>> {
        RecordSplitter::new(lines(input).into_iter(), "test", |l| l.starts_with('@'))
            .with_ignore(|l| l.starts_with('#'))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_zero_groups() {
        assert!(split(&[]).is_empty());
    }

    #[test]
    fn test_consecutive_heads_yield_one_line_groups() {
        let groups = split(&["@one", "@two"]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].as_ref().unwrap(), &vec!["@one".to_string()]);
        assert_eq!(groups[1].as_ref().unwrap(), &vec!["@two".to_string()]);
    }

    #[test]
    fn test_body_lines_follow_their_head() {
        let groups = split(&["#comment", "@one", "a", "b", "@two", "c"]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].as_ref().unwrap().len(), 3);
        assert_eq!(groups[1].as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_leading_content_without_head_is_an_error() {
        let groups = split(&["garbage", "@one"]);
        assert_eq!(groups.len(), 1);
        assert!(matches!(groups[0], Err(Error::Parse { .. })));
    }

    #[test]
    fn test_ignored_leading_content_is_fine() {
        let groups = split(&["#preamble", "#more", "@one", "a"]);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].is_ok());
    }

    #[test]
    fn test_group_by_field() {
        let rows = lines(&[
            "# comment",
            "a x seq1 1",
            "b y seq1 2",
            "c z seq2 3",
        ]);
        let groups =
            group_by_field(rows.into_iter(), 2, "test", |l| l.starts_with('#')).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1].len(), 1);
    }

    #[test]
    fn test_group_by_field_missing_key_is_an_error() {
        let rows = lines(&["a b"]);
        assert!(group_by_field(rows.into_iter(), 2, "test", |_| false).is_err());
    }
}

mod genefinder {
    use super::*;
    use crate::parse::genefinder::{is_head, parse_record};

    #[test]
    fn test_descriptor_and_rows() {
        let group = lines(&[
            "# Sequence Data: seqnum=1;seqlen=500;seqhdr=\"seqA some description\"",
            ">1_3_98_+",
            ">2_120_341_-",
        ]);
        let (sid, set) = parse_record(&group, "Prodigal").unwrap();
        assert_eq!(sid, "seqA");
        assert_eq!(set.len(), 2);

        let first = set.get("seqA_1").unwrap();
        assert_eq!(first.span().start(), 2);
        assert_eq!(first.span().end(), 98);
        assert_eq!(first.strand(), Strand::Forward);
        assert_eq!(first.feature_type(), Some("CDS"));
        assert_eq!(first.attributes().source.as_deref(), Some("Prodigal"));

        let second = set.get("seqA_2").unwrap();
        assert_eq!(second.strand(), Strand::Reverse);
    }

    #[test]
    fn test_quoted_value_with_semicolon() {
        let group = lines(&[
            "# Sequence Data: seqlen=200;seqhdr=\"seqB desc; with semicolon\";gc_cont=41.2",
            ">1_10_90_+",
        ]);
        let (sid, set) = parse_record(&group, "Prodigal").unwrap();
        assert_eq!(sid, "seqB");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_end_beyond_seqlen_is_an_error() {
        let group = lines(&[
            "# Sequence Data: seqlen=500;seqhdr=\"seqA\"",
            ">1_100_600_+",
        ]);
        assert!(matches!(
            parse_record(&group, "Prodigal"),
            Err(Error::Parse { .. })
        ));
    }

    #[rstest]
    #[case::missing_seqlen("# Sequence Data: seqhdr=\"seqA\"")]
    #[case::missing_seqhdr("# Sequence Data: seqlen=500")]
    #[case::bad_seqlen("# Sequence Data: seqlen=half;seqhdr=\"seqA\"")]
    fn test_bad_descriptor(#[case] head: &str) {
        let group = lines(&[head, ">1_10_90_+"]);
        assert!(parse_record(&group, "Prodigal").is_err());
    }

    #[rstest]
    #[case::bad_strand(">1_10_90_*")]
    #[case::zero_start(">1_0_90_+")]
    #[case::inverted(">1_90_10_+")]
    #[case::not_a_row("1_10_90_+")]
    fn test_bad_row(#[case] row: &str) {
        let group = lines(&["# Sequence Data: seqlen=500;seqhdr=\"seqA\"", row]);
        assert!(matches!(
            parse_record(&group, "Prodigal"),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn test_head_predicate() {
        assert!(is_head("# Sequence Data: seqlen=1"));
        assert!(!is_head("# Model Data: version=2"));
        assert!(!is_head(">1_3_98_+"));
    }

    #[test]
    fn test_head_only_record_has_no_features() {
        let group = lines(&["# Sequence Data: seqlen=500;seqhdr=\"seqA\""]);
        let (_, set) = parse_record(&group, "Prodigal").unwrap();
        assert!(set.is_empty());
    }
}

mod rfam {
    use super::*;
    use crate::parse::rfam::parse_record;

    #[test]
    fn test_forward_row_walkthrough() {
        // Spec walkthrough: [119, 200) on the forward strand, generic ncRNA.
        let group = lines(&["tRNA RF00005 seqA 0 0 0 120 200 + 0.9"]);
        let (sid, set) = parse_record(&group).unwrap();
        assert_eq!(sid, "seqA");
        assert_eq!(set.len(), 1);

        let (_, feature) = set.iter().next().unwrap();
        assert_eq!(feature.span().start(), 119);
        assert_eq!(feature.span().end(), 200);
        assert_eq!(feature.strand(), Strand::Forward);
        assert_eq!(feature.feature_type(), Some("ncRNA"));
        assert_eq!(feature.attributes().db_xref.as_deref(), Some("RF00005"));
        assert_eq!(
            feature.attributes().other.get("ncRNA_class").map(String::as_str),
            Some("tRNA")
        );
    }

    #[test]
    fn test_reverse_row_swaps_coordinates() {
        let group = lines(&["tRNA RF00005 seqA 0 0 0 200 120 - 0.9"]);
        let (_, set) = parse_record(&group).unwrap();
        let (_, feature) = set.iter().next().unwrap();
        assert_eq!(feature.span().start(), 119);
        assert_eq!(feature.span().end(), 200);
        assert_eq!(feature.strand(), Strand::Reverse);
    }

    #[rstest]
    #[case::rrna_16s("RF00177", "rRNA", Some("16s_rRNA"))]
    #[case::rrna_23s("RF02540", "rRNA", Some("23s_rRNA"))]
    #[case::rrna_5s("RF00001", "rRNA", Some("5s_rRNA"))]
    #[case::rrna_no_product("RF00002", "rRNA", None)]
    #[case::generic("RF99999", "ncRNA", None)]
    fn test_classification(
        #[case] fam: &str,
        #[case] expected_type: &str,
        #[case] product: Option<&str>,
    ) {
        let group = lines(&[format!("SSU_rRNA {} seqA 0 0 0 10 90 + 1.0", fam).as_str()]);
        let (_, set) = parse_record(&group).unwrap();
        let (_, feature) = set.iter().next().unwrap();
        assert_eq!(feature.feature_type(), Some(expected_type));
        assert_eq!(feature.attributes().product.as_deref(), product);
    }

    #[test]
    fn test_unknown_strand_is_an_error() {
        let group = lines(&["tRNA RF00005 seqA 0 0 0 120 200 ? 0.9"]);
        assert!(matches!(parse_record(&group), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_short_row_is_an_error() {
        let group = lines(&["tRNA RF00005 seqA 120 200 +"]);
        assert!(matches!(parse_record(&group), Err(Error::Parse { .. })));
    }
}

mod terminator {
    use super::*;
    use crate::parse::terminator::parse_record;

    fn sample() -> Vec<String> {
        lines(&[
            "SEQUENCE seqA (length 4000)",
            "gene1     12 - 340       + | ",
            "  TERM 1      371 - 398  + F  93 -11.5 -3.2 | opp_overlap",
            "    CGCCGC  ATCCGGT  TTCGG  ACCGGAT  GCAATCAA",
            "gene2    420 - 980       - | ",
        ])
    }

    #[test]
    fn test_record_with_empty_sub_block() {
        let (sid, set) = parse_record(&sample()).unwrap();
        assert_eq!(sid, "seqA");
        // gene2 predicted no terminator and contributes nothing.
        assert_eq!(set.len(), 1);

        let term = set.get("TERM_1").unwrap();
        assert_eq!(term.span().start(), 370);
        assert_eq!(term.span().end(), 398);
        assert_eq!(term.strand(), Strand::Forward);
        assert_eq!(term.feature_type(), Some("terminator"));
        assert_eq!(term.attributes().gene_id.as_deref(), Some("gene1"));
        assert_eq!(term.attributes().confidence.as_deref(), Some("93"));
        assert_eq!(
            term.attributes().sequence.as_deref(),
            Some("CGCCGC/ATCCGGT/TTCGG/ACCGGAT/GCAATCAA")
        );
    }

    #[test]
    fn test_reverse_strand_swaps_coordinates() {
        let group = lines(&[
            "SEQUENCE seqB stuff",
            "gene1     12 - 340       - | ",
            "  TERM 2      398 - 371  - F  77 -11.5 -3.2 | ",
            "    CGCCGC  ATCCGGT  TTCGG",
        ]);
        let (_, set) = parse_record(&group).unwrap();
        let term = set.get("TERM_2").unwrap();
        assert_eq!(term.span().start(), 370);
        assert_eq!(term.span().end(), 398);
        assert_eq!(term.strand(), Strand::Reverse);
    }

    #[test]
    fn test_missing_hairpin_line_is_an_error() {
        let group = lines(&[
            "SEQUENCE seqB stuff",
            "gene1     12 - 340       + | ",
            "  TERM 2      371 - 398  + F  77 -11.5 -3.2 | ",
        ]);
        assert!(matches!(parse_record(&group), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_unknown_strand_is_an_error() {
        let group = lines(&[
            "SEQUENCE seqB stuff",
            "gene1     12 - 340       + | ",
            "  TERM 2      371 - 398  ? F  77 -11.5 -3.2 | ",
            "    CGCCGC  ATCCGGT",
        ]);
        assert!(matches!(parse_record(&group), Err(Error::Parse { .. })));
    }
}

mod hits {
    use super::*;
    use crate::parse::hits::{parse_table, Hit};

    #[test]
    fn test_parse_table() {
        let rows = lines(&[
            "# Fields: qseqid sseqid pident",
            "seqA_1 UniRef100_P0A7G6 98.2 120",
            "seqA_3 UniRef100_Q9X2F4 77.0 80",
            "",
        ]);
        let hits = parse_table(rows.into_iter()).unwrap();
        assert_eq!(hits, vec![
            Hit {
                query:   "seqA_1".to_string(),
                subject: "UniRef100_P0A7G6".to_string(),
            },
            Hit {
                query:   "seqA_3".to_string(),
                subject: "UniRef100_Q9X2F4".to_string(),
            },
        ]);
    }

    #[test]
    fn test_single_field_row_is_an_error() {
        let rows = lines(&["loner"]);
        assert!(matches!(
            parse_table(rows.into_iter()),
            Err(Error::Parse { .. })
        ));
    }
}
