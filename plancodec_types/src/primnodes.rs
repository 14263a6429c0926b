use crate::enums::*;
use crate::{AttrNumber, Bitmapset, Datum, Index, List, NodePtr, Oid};

/// Width of a tuple identifier: block number (4 bytes) then offset (2 bytes).
pub const ITEM_POINTER_SIZE: usize = 6;

pub type ItemPointer = [u8; ITEM_POINTER_SIZE];

/// Width of the fixed part of one attribute description, as the catalog lays it out.
pub const ATTRIBUTE_FIXED_PART_SIZE: usize = 104;

pub type AttributeBlob = [u8; ATTRIBUTE_FIXED_PART_SIZE];

#[derive(PartialEq, Clone, Default, Debug)]
pub struct Alias {
    pub aliasname: Option<String>,
    pub colnames: Option<List>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct Var {
    pub varno: Index,
    pub varattno: AttrNumber,
    pub vartype: Oid,
    pub vartypmod: i32,
    pub varlevelsup: Index,
    pub varnoold: Index,
    pub varoattno: AttrNumber,
}

/// A typed constant.
///
/// `constlen` and `constbyval` describe how `constvalue` is stored and are trusted as given;
/// nothing cross-checks them against `consttype`.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct Const {
    pub consttype: Oid,
    pub constlen: i32,
    pub constbyval: bool,
    pub constisnull: bool,
    pub constvalue: Datum,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct Param {
    pub paramkind: ParamKind,
    pub paramid: i32,
    pub paramtype: Oid,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct Aggref {
    pub aggfnoid: Oid,
    pub aggtype: Oid,
    pub args: Option<List>,
    pub agglevelsup: Index,
    pub aggstar: bool,
    pub aggdistinct: bool,
    pub aggstage: AggStage,
    pub aggorder: NodePtr,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct FuncExpr {
    pub funcid: Oid,
    pub funcresulttype: Oid,
    pub funcretset: bool,
    pub funcformat: CoercionForm,
    pub args: Option<List>,
    pub is_tablefunc: bool,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct OpExpr {
    pub opno: Oid,
    pub opfuncid: Oid,
    pub opresulttype: Oid,
    pub opretset: bool,
    pub args: Option<List>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct BoolExpr {
    pub boolop: BoolExprType,
    pub args: Option<List>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct SubLink {
    pub sub_link_type: SubLinkType,
    pub testexpr: NodePtr,
    pub oper_name: Option<List>,
    pub location: i32,
    pub subselect: NodePtr,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct SubPlan {
    pub sub_link_type: SubLinkType,
    pub testexpr: NodePtr,
    pub param_ids: Option<List>,
    pub plan_id: i32,
    pub first_col_type: Oid,
    pub first_col_typmod: i32,
    pub use_hash_table: bool,
    pub unknown_eq_false: bool,
    pub is_initplan: bool,
    pub is_multirow: bool,
    pub set_param: Option<List>,
    pub par_param: Option<List>,
    pub args: Option<List>,
    pub ext_param: Option<Bitmapset>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct RelabelType {
    pub arg: NodePtr,
    pub resulttype: Oid,
    pub resulttypmod: i32,
    pub relabelformat: CoercionForm,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct CaseExpr {
    pub casetype: Oid,
    pub arg: NodePtr,
    pub args: Option<List>,
    pub defresult: NodePtr,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct CaseWhen {
    pub expr: NodePtr,
    pub result: NodePtr,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct NullTest {
    pub arg: NodePtr,
    pub nulltesttype: NullTestType,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct CurrentOfExpr {
    pub cursor_name: Option<String>,
    pub cvarno: Index,
    pub target_relid: Oid,
    pub gp_segment_id: i32,
    pub ctid: ItemPointer,
    pub tableoid: Oid,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct TargetEntry {
    pub expr: NodePtr,
    pub resno: AttrNumber,
    pub resname: Option<String>,
    pub ressortgroupref: Index,
    pub resorigtbl: Oid,
    pub resorigcol: AttrNumber,
    pub resjunk: bool,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct RangeTblRef {
    pub rtindex: i32,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct JoinExpr {
    pub jointype: JoinType,
    pub is_natural: bool,
    pub larg: NodePtr,
    pub rarg: NodePtr,
    pub using_clause: Option<List>,
    pub quals: NodePtr,
    pub alias: NodePtr,
    pub rtindex: i32,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct FromExpr {
    pub fromlist: Option<List>,
    pub quals: NodePtr,
}

/// Planner bookkeeping for an outer join's minimal input relation sets.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct OuterJoinInfo {
    pub min_lefthand: Option<Bitmapset>,
    pub min_righthand: Option<Bitmapset>,
    pub join_type: JoinType,
    pub lhs_strict: bool,
}

/// What the planner knows about one index of a relation.
///
/// `classlist`, `indexkeys` and `ordering` hold one element per index column each.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct IndexOptInfo {
    pub indexoid: Oid,
    pub pages: u32,
    pub tuples: f64,
    pub classlist: Vec<Oid>,
    pub indexkeys: Vec<i32>,
    pub ordering: Vec<Oid>,
    pub relam: Oid,
    pub amcostestimate: Oid,
    pub indexprs: Option<List>,
    pub indpred: Option<List>,
    pub pred_ok: bool,
    pub unique: bool,
    pub amoptionalkey: bool,
    pub cdb_default_stats_used: bool,
}

/// Row shape of an anonymous record type.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct TupleDesc {
    pub attrs: Vec<AttributeBlob>,
    pub tdtypeid: Oid,
    pub tdtypmod: i32,
    pub tdqdtypmod: i32,
    pub tdhasoid: bool,
    pub tdrefcount: i32,
}

/// Carries a transient record type to the workers.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct TupleDescNode {
    pub natts: i32,
    pub tuple: TupleDesc,
}
