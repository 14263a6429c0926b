use crate::enums::*;
use crate::{AttrNumber, Index, List, NodePtr, Oid};

/// A parsed, analyzed statement.
///
/// The distribution policy is computed where the statement is planned and is not part of this node.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct Query {
    pub command_type: CmdType,
    pub query_source: QuerySource,
    pub can_set_tag: bool,

    pub utility_stmt: NodePtr,
    pub result_relation: i32,
    pub into_clause: NodePtr,
    pub has_aggs: bool,
    pub has_wind_funcs: bool,
    pub has_sub_links: bool,

    pub rtable: Option<List>,
    pub jointree: NodePtr,
    pub target_list: Option<List>,
    pub returning_list: Option<List>,
    pub group_clause: Option<List>,
    pub having_qual: NodePtr,
    pub window_clause: Option<List>,
    pub distinct_clause: Option<List>,
    pub sort_clause: Option<List>,
    pub scatter_clause: Option<List>,
    pub cte_list: Option<List>,
    pub has_recursive: bool,
    pub has_modifying_cte: bool,
    pub limit_offset: NodePtr,
    pub limit_count: NodePtr,
    pub row_marks: Option<List>,
    pub set_operations: NodePtr,
    pub result_relations: Option<List>,
    pub result_partitions: NodePtr,
    pub result_aosegnos: Option<List>,
    pub returning_lists: Option<List>,
}

/// One entry of a range table.
///
/// Which attributes are meaningful depends on `rtekind`; the rest are carried but ignored.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct RangeTblEntry {
    pub alias: NodePtr,
    pub eref: NodePtr,
    pub rtekind: RteKind,

    /* Relation, Special */
    pub relid: Oid,

    /* Subquery, TableFunction */
    pub subquery: NodePtr,

    /* Cte */
    pub ctename: Option<String>,
    pub ctelevelsup: Index,
    pub self_reference: bool,
    pub ctecoltypes: Option<List>,
    pub ctecoltypmods: Option<List>,

    /* Function, TableFunction */
    pub funcexpr: NodePtr,
    pub funccoltypes: Option<List>,
    pub funccoltypmods: Option<List>,
    /// Opaque bytea handed to a table function; `None` when unset.
    pub funcuserdata: Option<Vec<u8>>,

    /* Values */
    pub values_lists: Option<List>,

    /* Join */
    pub jointype: JoinType,
    pub joinaliasvars: Option<List>,

    pub inh: bool,
    pub in_from_cl: bool,
    pub required_perms: u32,
    pub check_as_user: Oid,
    pub force_dist_random: bool,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct AExpr {
    pub kind: AExprKind,
    pub name: Option<List>,
    pub lexpr: NodePtr,
    pub rexpr: NodePtr,
    pub location: i32,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct ColumnRef {
    pub fields: Option<List>,
    pub location: i32,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct ParamRef {
    pub number: i32,
    pub location: i32,
}

/// A literal as written in the query text. `val` must hold one of the literal nodes.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct AConst {
    pub val: NodePtr,
    pub typname: NodePtr,
    pub location: i32,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct TypeName {
    pub names: Option<List>,
    pub typid: Oid,
    pub timezone: bool,
    pub setof: bool,
    pub pct_type: bool,
    pub typmod: i32,
    pub array_bounds: Option<List>,
    pub location: i32,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct TypeCast {
    pub arg: NodePtr,
    pub typname: NodePtr,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct ResTarget {
    pub name: Option<String>,
    pub indirection: Option<List>,
    pub val: NodePtr,
    pub location: i32,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct FuncCall {
    pub funcname: Option<List>,
    pub args: Option<List>,
    pub agg_order: Option<List>,
    pub agg_star: bool,
    pub agg_distinct: bool,
    pub func_variadic: bool,
    pub over: NodePtr,
    pub location: i32,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct SortClause {
    pub tle_sort_group_ref: Index,
    pub sortop: Oid,
    pub nulls_first: bool,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct GroupClause {
    pub tle_sort_group_ref: Index,
    pub sortop: Oid,
    pub nulls_first: bool,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct RowMarkClause {
    pub rti: Index,
    pub for_update: bool,
    pub no_wait: bool,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct CommonTableExpr {
    pub ctename: Option<String>,
    pub aliascolnames: Option<List>,
    pub ctequery: NodePtr,
    pub location: i32,
    pub cterecursive: bool,
    pub cterefcount: i32,
    pub ctecolnames: Option<List>,
    pub ctecoltypes: Option<List>,
    pub ctecoltypmods: Option<List>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct DefElem {
    pub defname: Option<String>,
    pub arg: NodePtr,
    pub defaction: DefElemAction,
}

/// A column or table constraint. Which attributes are meaningful depends on `contype`.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct Constraint {
    pub name: Option<String>,
    pub conoid: Oid,
    pub contype: ConstrType,

    /* Primary, Unique */
    pub keys: Option<List>,
    pub options: Option<List>,
    pub indexspace: Option<String>,

    /* Check, Default */
    pub raw_expr: NodePtr,
    pub cooked_expr: Option<String>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct ColumnDef {
    pub colname: Option<String>,
    pub typname: NodePtr,
    pub inhcount: i32,
    pub is_local: bool,
    pub is_not_null: bool,
    pub attnum: i32,
    pub default_oid: Oid,
    pub raw_default: NodePtr,
    pub default_is_null: bool,
    pub cooked_default: Option<String>,
    pub constraints: Option<List>,
    pub encoding: Option<List>,
}

/// Pre-assigned OIDs for a new relation and its auxiliary relations.
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct TableOidInfo {
    pub rel_oid: Oid,
    pub comptype_oid: Oid,
    pub toast_oid: Oid,
    pub toast_index_oid: Oid,
    pub toast_comptype_oid: Oid,
    pub aoseg_oid: Oid,
    pub aoseg_index_oid: Oid,
    pub aoseg_comptype_oid: Oid,
    pub aovisimap_oid: Oid,
    pub aovisimap_index_oid: Oid,
    pub aovisimap_comptype_oid: Oid,
    pub aoblkdir_oid: Oid,
    pub aoblkdir_index_oid: Oid,
    pub aoblkdir_comptype_oid: Oid,
}

/// Distribution policy and the statements deferred to after creation stay with the coordinator.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct CreateStmt {
    pub relation: NodePtr,
    pub table_elts: Option<List>,
    pub inh_relations: Option<List>,
    pub inh_oids: Option<List>,
    pub parent_oid_count: i32,
    pub constraints: Option<List>,
    pub options: Option<List>,
    pub oncommit: OnCommitAction,
    pub tablespacename: Option<String>,
    pub distributed_by: Option<List>,
    pub oid_info: TableOidInfo,
    pub rel_kind: u8,
    pub rel_storage: u8,
    pub is_part_child: bool,
    pub is_add_part: bool,
    pub is_split_part: bool,
    pub ownerid: Oid,
    pub build_ao_blkdir: bool,
    pub is_error_table: bool,
    pub attr_encodings: Option<List>,
}

/// One level of a partitioning hierarchy. `parclass` runs parallel to `paratts` and must match it
/// in length.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct Partition {
    pub partid: Oid,
    pub parrelid: Oid,
    pub parkind: u8,
    pub parlevel: i32,
    pub paristemplate: bool,
    pub paratts: Vec<AttrNumber>,
    pub parclass: Vec<Oid>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct PartitionRule {
    pub parruleid: Oid,
    pub paroid: Oid,
    pub parchildrelid: Oid,
    pub parparentoid: Oid,
    pub parisdefault: bool,
    pub parname: Option<String>,
    pub parrangestart: NodePtr,
    pub parrangestartincl: bool,
    pub parrangeend: NodePtr,
    pub parrangeendincl: bool,
    pub parrangeevery: NodePtr,
    pub parlistvalues: Option<List>,
    pub parruleord: i16,
    pub parreloptions: Option<List>,
    pub partemplatespace_id: Oid,
    pub children: NodePtr,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct CreateDomainStmt {
    pub domainname: Option<List>,
    pub typname: NodePtr,
    pub constraints: Option<List>,
    pub domain_oid: Oid,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct AlterDomainStmt {
    pub subtype: u8,
    pub typname: Option<List>,
    pub name: Option<String>,
    pub def: NodePtr,
    pub behavior: DropBehavior,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct PartitionSpec {
    pub part_elem: Option<List>,
    pub sub_spec: NodePtr,
    pub istemplate: bool,
    pub location: i32,
    pub enc_clauses: Option<List>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct PartitionBoundSpec {
    pub part_start: NodePtr,
    pub part_end: NodePtr,
    pub part_every: NodePtr,
    pub location: i32,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct AlterPartitionCmd {
    pub partid: NodePtr,
    pub arg1: NodePtr,
    pub arg2: NodePtr,
    pub new_oids: Option<List>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct CreateQueueStmt {
    pub queue: Option<String>,
    pub options: Option<List>,
    pub queue_oid: Oid,
    pub optids: Option<List>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct AlterQueueStmt {
    pub queue: Option<String>,
    pub options: Option<List>,
    pub optids: Option<List>,
}
