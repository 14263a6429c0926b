use anyhow::{anyhow, Result};
use derive_more::{Deref, From};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use std::any;

#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct NodeTagInt(u16);
impl From<NodeTag> for NodeTagInt {
    fn from(tag: NodeTag) -> Self {
        let int = tag.to_u16().unwrap();
        Self(int)
    }
}

/// Kind tags shared with the decoder.
///
/// Numbers are grouped by family and never reused. Zero is reserved for "nothing follows",
/// which covers both an absent node and an absent list.
///
/// Container kinds (`List`, `IntList`, `OidList`) and literal kinds (`Integer` .. `Null`)
/// live in the same space as every other kind.
#[repr(u16)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum NodeTag {
    Invalid = 0,

    /* plan nodes */
    Result = 100,
    Append = 101,
    SeqScan = 110,
    IndexScan = 111,
    SubqueryScan = 112,
    FunctionScan = 113,
    ValuesScan = 114,
    NestLoop = 120,
    MergeJoin = 121,
    HashJoin = 122,
    Material = 130,
    Sort = 131,
    Agg = 132,
    Window = 133,
    Unique = 134,
    Hash = 135,
    SetOp = 136,
    Limit = 137,
    Motion = 138,
    PlannedStmt = 150,
    WindowKey = 151,

    /* primitive expression nodes */
    Alias = 300,
    Var = 301,
    Const = 302,
    Param = 303,
    Aggref = 304,
    FuncExpr = 305,
    OpExpr = 306,
    BoolExpr = 307,
    SubLink = 308,
    SubPlan = 309,
    RelabelType = 310,
    CaseExpr = 311,
    CaseWhen = 312,
    NullTest = 313,
    CurrentOfExpr = 314,
    TargetEntry = 315,
    RangeTblRef = 316,
    JoinExpr = 317,
    FromExpr = 318,
    Flow = 319,

    /* optimizer nodes */
    PlannerInfo = 500,
    RelOptInfo = 501,
    Path = 502,
    RestrictInfo = 503,
    OuterJoinInfo = 504,
    IndexOptInfo = 505,

    /* dispatch metadata */
    Slice = 550,
    SliceTable = 551,
    TupleDescNode = 552,

    /* literal values */
    Integer = 650,
    Float = 651,
    String = 652,
    BitString = 653,
    Null = 654,

    /* containers */
    List = 700,
    IntList = 701,
    OidList = 702,

    /* parse nodes */
    Query = 900,
    CreateStmt = 901,
    CreateDomainStmt = 902,
    AlterDomainStmt = 903,
    CreateQueueStmt = 904,
    AlterQueueStmt = 905,
    AlterPartitionCmd = 906,
    AExpr = 950,
    ColumnRef = 951,
    ParamRef = 952,
    AConst = 953,
    FuncCall = 954,
    ResTarget = 955,
    TypeCast = 956,
    TypeName = 957,
    ColumnDef = 958,
    Constraint = 959,
    DefElem = 960,
    RangeTblEntry = 961,
    SortClause = 962,
    GroupClause = 963,
    RowMarkClause = 964,
    CommonTableExpr = 965,
    Partition = 966,
    PartitionRule = 967,
    PartitionSpec = 968,
    PartitionBoundSpec = 969,
}
impl TryFrom<NodeTagInt> for NodeTag {
    type Error = anyhow::Error;
    fn try_from(int: NodeTagInt) -> Result<Self> {
        NodeTag::from_u16(int.0).ok_or(anyhow!(
            "Unknown {} {}",
            any::type_name::<NodeTagInt>(),
            int.0
        ))
    }
}

impl NodeTag {
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            NodeTag::Integer | NodeTag::Float | NodeTag::String | NodeTag::BitString | NodeTag::Null
        )
    }

    pub fn is_container(self) -> bool {
        matches!(self, NodeTag::List | NodeTag::IntList | NodeTag::OidList)
    }
}
