//! Small reconciled model shared by command tests.

use chrono::{TimeZone, Utc};
use ventore_config::HeaderMap;
use ventore_core::entities::DataModel;
use ventore_model::{SheetSet, build_from_sheets};

const MASTER: &str = "\
Record ID,Legal Investment Name,Known Name,Project
R1,Acme Holdings Ltd,Acme,\"ARIA (Stage 1), RUNE\"
R2,Globex Corporation,Globex,Polarity - Stage 2
,Initech LLC,,ARIA (Seed)
";

const ARIA: &str = "\
Record ID,Known Name,Status,Shares Reserved,Total Signed Value,Notes
A1,Acme,Reserved,100,0,call back monday
A2,Acme,Signed,0,\"12,500\",
";

const POLARITY: &str = "\
Record ID,Known Name,Status,Blocks Pending
P1,Globex,Pending,5
P1,Globex,Pending,5
";

const COMPLIANCE: &str = "\
Record ID,Project,Investor,Investor (Cap Table),Next Steps
K1,ARIA (Stage 1),Acme,A1,chase passport
K2,RUNE,Hooli,U9,
";

pub fn model() -> DataModel {
    let sheets = SheetSet::from_csv(MASTER, "", ARIA, POLARITY, COMPLIANCE);
    build_from_sheets(
        &sheets,
        &HeaderMap::default(),
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap(),
    )
}
