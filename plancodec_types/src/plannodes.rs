use crate::enums::*;
use crate::{AttrNumber, Bitmapset, Index, List, NodePtr, Oid};

/// Attributes every plan operator carries, ahead of its own.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct PlanInfo {
    pub plan_node_id: i32,
    pub plan_parent_node_id: i32,

    /* estimates */
    pub startup_cost: f64,
    pub total_cost: f64,
    pub plan_rows: f64,
    pub plan_width: i32,

    pub targetlist: Option<List>,
    pub qual: Option<List>,

    pub ext_param: Option<Bitmapset>,
    pub all_param: Option<Bitmapset>,
    pub n_param_exec: i32,

    /* dispatch */
    pub flow: NodePtr,
    pub dispatch: DispatchMethod,
    pub direct_dispatch: DirectDispatchInfo,
    pub n_motion_nodes: i32,
    pub n_init_plans: i32,
    pub slice_table: NodePtr,

    pub lefttree: NodePtr,
    pub righttree: NodePtr,
    pub init_plan: Option<List>,

    pub operator_mem_kb: u64,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct DirectDispatchInfo {
    pub is_direct_dispatch: bool,
    pub content_ids: Option<List>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct ScanInfo {
    pub plan: PlanInfo,
    /// One-based index into the statement's range table.
    pub scanrelid: Index,
    pub part_index: i32,
    pub part_index_printable: i32,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct JoinInfo {
    pub plan: PlanInfo,
    pub prefetch_inner: bool,
    pub jointype: JoinType,
    pub joinqual: Option<List>,
}

/// The root of a dispatched plan.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct PlannedStmt {
    pub command_type: CmdType,
    pub plan_gen: PlanGenerator,
    pub can_set_tag: bool,
    pub transient_plan: bool,

    pub plan_tree: NodePtr,
    pub rtable: Option<List>,

    pub result_relations: Option<List>,
    pub utility_stmt: NodePtr,
    pub into_clause: NodePtr,
    pub subplans: Option<List>,
    pub rewind_plan_ids: Option<Bitmapset>,
    pub returning_lists: Option<List>,

    pub result_partitions: NodePtr,
    pub result_aosegnos: Option<List>,
    pub query_part_oids: Option<List>,
    pub query_parts_metadata: Option<List>,
    pub num_selectors_per_scan_id: Option<List>,
    pub row_marks: Option<List>,
    pub relation_oids: Option<List>,
    pub inval_items: Option<List>,
    pub n_cross_level_params: i32,
    pub n_motion_nodes: i32,
    pub n_init_plans: i32,

    pub slice_table: NodePtr,

    pub query_mem: u64,
    pub transient_type_records: Option<List>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct ResultPlan {
    pub plan: PlanInfo,
    pub resconstantqual: NodePtr,
    pub hash_filter: bool,
    pub hash_list: Option<List>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct Append {
    pub plan: PlanInfo,
    pub appendplans: Option<List>,
    pub is_target: bool,
    pub is_zapped: bool,
    pub has_xslice: bool,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct SeqScan {
    pub scan: ScanInfo,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct IndexScan {
    pub scan: ScanInfo,
    pub indexid: Oid,
    pub indexqual: Option<List>,
    pub indexqualorig: Option<List>,
    pub indexstrategy: Option<List>,
    pub indexsubtype: Option<List>,
    pub indexorderdir: ScanDirection,
}

/// The planner's sub-range-table lives only in the planner and is not part of this node.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct SubqueryScan {
    pub scan: ScanInfo,
    pub subplan: NodePtr,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct FunctionScan {
    pub scan: ScanInfo,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct ValuesScan {
    pub scan: ScanInfo,
    pub values_lists: Option<List>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct NestLoop {
    pub join: JoinInfo,
    pub outernotreferencedbyinner: bool,
    pub shared_outer: bool,
    pub singleton_outer: bool,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct MergeJoin {
    pub join: JoinInfo,
    pub mergeclauses: Option<List>,
    pub unique_outer: bool,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct HashJoin {
    pub join: JoinInfo,
    pub hashclauses: Option<List>,
    pub hashqualclauses: Option<List>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct Hash {
    pub plan: PlanInfo,
    pub rescannable: bool,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct Material {
    pub plan: PlanInfo,
    pub cdb_strict: bool,
    pub share_type: ShareType,
    pub share_id: i32,
    pub driver_slice: i32,
    pub nsharer: i32,
    pub nsharer_xslice: i32,
}

/// `sort_operators` runs parallel to `sort_col_idx` and must match it in length.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct Sort {
    pub plan: PlanInfo,
    pub sort_col_idx: Vec<AttrNumber>,
    pub sort_operators: Vec<Oid>,
    pub limit_offset: NodePtr,
    pub limit_count: NodePtr,
    pub noduplicates: bool,
    pub share_type: ShareType,
    pub share_id: i32,
    pub driver_slice: i32,
    pub nsharer: i32,
    pub nsharer_xslice: i32,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct Agg {
    pub plan: PlanInfo,
    pub aggstrategy: AggStrategy,
    pub grp_col_idx: Vec<AttrNumber>,
    pub num_groups: i64,
    pub trans_space: i32,
    pub num_null_cols: i32,
    pub input_grouping: u64,
    pub grouping: u64,
    pub input_has_grouping: bool,
    pub rollup_gs_times: i32,
    pub last_agg: bool,
    pub streaming: bool,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct WindowKey {
    pub sort_col_idx: Vec<AttrNumber>,
    pub sort_operators: Vec<Oid>,
    pub frame: NodePtr,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct Window {
    pub plan: PlanInfo,
    pub part_col_idx: Vec<AttrNumber>,
    pub window_keys: Option<List>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct Unique {
    pub plan: PlanInfo,
    pub uniq_col_idx: Vec<AttrNumber>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct SetOp {
    pub plan: PlanInfo,
    pub cmd: SetOpCmd,
    pub dup_col_idx: Vec<AttrNumber>,
    pub flag_col_idx: i32,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct Limit {
    pub plan: PlanInfo,
    pub limit_offset: NodePtr,
    pub limit_count: NodePtr,
}

/// Moves tuples between slices. Its plan prefix is written after its own attributes.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct Motion {
    pub plan: PlanInfo,
    pub motion_id: i32,
    pub motion_type: MotionType,
    pub send_sorted: bool,
    pub hash_expr: Option<List>,
    pub hash_data_types: Option<List>,
    pub output_seg_idx: Vec<i32>,
    pub sort_col_idx: Vec<AttrNumber>,
    pub sort_operators: Vec<Oid>,
    pub segid_col_idx: i32,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct Flow {
    pub flotype: FlowType,
    pub req_move: Movement,
    pub locustype: LocusType,
    pub segindex: i32,
    pub sort_col_idx: Vec<AttrNumber>,
    pub sort_operators: Vec<Oid>,
    pub hash_expr: Option<List>,
    pub flow_before_req_move: NodePtr,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct Slice {
    pub slice_index: i32,
    pub root_index: i32,
    pub gang_type: GangType,
    pub gang_size: i32,
    pub num_gang_members_to_be_active: i32,
    pub direct_dispatch: DirectDispatchInfo,
    pub primary_gang_id: i32,
    pub parent_index: i32,
    pub children: Option<List>,
    pub primary_processes: Option<List>,
}

#[derive(PartialEq, Clone, Default, Debug)]
pub struct SliceTable {
    pub n_motions: i32,
    pub n_init_plans: i32,
    pub local_slice: i32,
    pub slices: Option<List>,
    pub do_instrument: bool,
    pub ic_instance_id: u32,
}
