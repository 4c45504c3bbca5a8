// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const OPTIONS_FILE: &str = "options.json";

// Roster
pub const ROSTER_URL: &str = "https://en.wikipedia.org/wiki/List_of_members_of_the_17th_Lok_Sabha";
pub const ROSTER_TABLE_CLASS: &str = "wikitable";
pub const ROSTER_OUT_FILE: &str = "lok_sabha_all_members.csv";

// Debates
pub const TRANSCRIPTS_DIR: &str = "transcripts";
pub const DEBATE_FILE_PREFIX: &str = "debate_";
pub const RENDER_SETTLE_SECS: u64 = 20; // client-side rendering

/// Sessions fetched by default: (session key, view-debate URL).
pub const DEBATE_LINKS: &[(&str, &str)] = &[
    ("16_4_24Feb2015", "https://sansad.in/ls/debates/view-debate?ls=16&session=4&dbslno=2624"),
    ("16_4_25Feb2015", "https://sansad.in/ls/debates/view-debate?ls=16&session=4&dbslno=2683"),
    ("16_4_26Feb2015", "https://sansad.in/ls/debates/view-debate?ls=16&session=4&dbslno=2782"),
    ("16_4_27Feb2015", "https://sansad.in/ls/debates/view-debate?ls=16&session=4&dbslno=2816"),
    ("16_7_24Feb2016", "https://sansad.in/ls/debates/view-debate?ls=16&session=7&dbslno=6167"),
    ("16_7_25Feb2016", "https://sansad.in/ls/debates/view-debate?ls=16&session=7&dbslno=6250"),
    ("16_7_26Feb2016", "https://sansad.in/ls/debates/view-debate?ls=16&session=7&dbslno=6757"),
    ("16_7_02Mar2016", "https://sansad.in/ls/debates/view-debate?ls=16&session=7&dbslno=6582"),
    ("16_11_07Feb2017", "https://sansad.in/ls/debates/view-debate?ls=16&session=11&dbslno=9905"),
    ("16_14_06Feb2018", "https://sansad.in/ls/debates/view-debate?ls=16&session=14&dbslno=13239"),
    ("16_14_07Feb2018", "https://sansad.in/ls/debates/view-debate?ls=16&session=14&dbslno=13239"),
    ("16_17_05Feb2019", "https://sansad.in/ls/debates/view-debate?ls=16&session=17&dbslno=15697"),
    ("16_17_07Feb2019", "https://sansad.in/ls/debates/view-debate?ls=16&session=17&dbslno=15389"),
    ("17_1_24Jun2019", "https://sansad.in/ls/debates/view-debate?ls=17&session=1&dbslno=322"),
    ("17_1_25Jun2019", "https://sansad.in/ls/debates/view-debate?ls=17&session=1&dbslno=690"),
    ("17_3_03Feb2020", "https://sansad.in/ls/debates/view-debate?ls=17&session=3&dbslno=3338"),
    ("17_3_04Feb2020", "https://sansad.in/ls/debates/view-debate?ls=17&session=3&dbslno=3629"),
    ("17_3_05Feb2020", "https://sansad.in/ls/debates/view-debate?ls=17&session=3&dbslno=3835"),
    ("17_3_06Feb2020", "https://sansad.in/ls/debates/view-debate?ls=17&session=3&dbslno=3434"),
];

// Segmentation
pub const SEGMENTS_DIR: &str = "csv_files";
pub const COVERAGE_THRESHOLD: f64 = 0.9;
pub const MERGE_TOLERANCE: usize = 5;
pub const PREAMBLE: &str = "Preamble";
pub const MISC_YEAR_DIR: &str = "misc";

// PDF synopsis
pub const PDF_FIRST_PAGE: usize = 5; // 0-based; skips the cover/index pages
pub const PDF_DUMP_FILE: &str = "output.txt";
pub const SYNOPSIS_CSV_FILE: &str = "speaker_speech_pairs.csv";

// Notebooks
pub const NOTEBOOK_RUNNER: &str = "papermill";
pub const JOIN_NOTEBOOK: &str = "mapper.ipynb";
pub const JOIN_INPUT_DIR: &str = "../preprocessing/agg_outputs";
pub const JOIN_OUTPUT_DIR: &str = "agg_party";
pub const JOIN_EXECUTED_DIR: &str = "executed";
pub const PARTY_LOOKUP_FILE: &str = "metadata_mapping_16_17_18.csv";
pub const PREPROCESS_NOTEBOOK: &str = "prepro.ipynb";
pub const PREPROCESS_INPUT_DIR: &str = "misc";
pub const PREPROCESS_OUTPUT_DIR: &str = "agg_outputs";
