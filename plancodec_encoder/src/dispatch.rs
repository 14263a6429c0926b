use crate::error::{EncodeError, Result};
use crate::mode::EncodeContext;
use crate::wire::{ElemCount, WireBuf, WriteLen};
use derive_more::{Deref, DerefMut};
use plancodec_types::{Datum, List, Node, NodePtr, NodeTag};
use tracing::trace;

/// Walks a tree into a [`WireBuf`], under one [`EncodeContext`].
///
/// The per-kind emission routines live in [`crate::catalog`] as further `impl` blocks.
#[derive(Deref, DerefMut)]
pub struct NodeWriter<'cx> {
    #[deref]
    #[deref_mut]
    w: WireBuf,
    cx: EncodeContext<'cx>,
}

impl<'cx> NodeWriter<'cx> {
    pub fn new(w: WireBuf, cx: EncodeContext<'cx>) -> Self {
        Self { w, cx }
    }

    pub fn cx(&self) -> &EncodeContext<'cx> {
        &self.cx
    }

    pub fn into_inner(self) -> WireBuf {
        self.w
    }

    /// Appends the trailing sentinel and hands back the bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.w.write_sentinel();
        self.w.into()
    }

    /// Writes a node and, through it, everything below.
    ///
    /// Literal and container kinds go to their own codecs; every other kind to its emission
    /// routine. A kind with no routine is rejected before its tag is written.
    pub fn write_node(&mut self, node: Option<&Node>) -> Result<WriteLen> {
        let node = match node {
            None => return Ok(self.write_tag(NodeTag::Invalid)),
            Some(node) => node,
        };
        trace!(tag = ?node.tag(), "writing node");

        match node {
            Node::Value(val) => self.write_value(val),
            Node::List(list) => self.write_list(Some(list)),

            /* plan tree */
            Node::PlannedStmt(n) => self.write_planned_stmt(n),
            Node::Result(n) => self.write_result(n),
            Node::Append(n) => self.write_append(n),
            Node::SeqScan(n) => self.write_seq_scan(n),
            Node::IndexScan(n) => self.write_index_scan(n),
            Node::SubqueryScan(n) => self.write_subquery_scan(n),
            Node::FunctionScan(n) => self.write_function_scan(n),
            Node::ValuesScan(n) => self.write_values_scan(n),
            Node::NestLoop(n) => self.write_nest_loop(n),
            Node::MergeJoin(n) => self.write_merge_join(n),
            Node::HashJoin(n) => self.write_hash_join(n),
            Node::Hash(n) => self.write_hash(n),
            Node::Material(n) => self.write_material(n),
            Node::Sort(n) => self.write_sort(n),
            Node::Agg(n) => self.write_agg(n),
            Node::WindowKey(n) => self.write_window_key(n),
            Node::Window(n) => self.write_window(n),
            Node::Unique(n) => self.write_unique(n),
            Node::SetOp(n) => self.write_set_op(n),
            Node::Limit(n) => self.write_limit(n),
            Node::Motion(n) => self.write_motion(n),
            Node::Flow(n) => self.write_flow(n),
            Node::Slice(n) => self.write_slice(n),
            Node::SliceTable(n) => self.write_slice_table(n),

            /* expressions */
            Node::Alias(n) => self.write_alias(n),
            Node::Var(n) => self.write_var(n),
            Node::Const(n) => self.write_const(n),
            Node::Param(n) => self.write_param(n),
            Node::Aggref(n) => self.write_aggref(n),
            Node::FuncExpr(n) => self.write_func_expr(n),
            Node::OpExpr(n) => self.write_op_expr(n),
            Node::BoolExpr(n) => self.write_bool_expr(n),
            Node::SubLink(n) => self.write_sub_link(n),
            Node::SubPlan(n) => self.write_sub_plan(n),
            Node::RelabelType(n) => self.write_relabel_type(n),
            Node::CaseExpr(n) => self.write_case_expr(n),
            Node::CaseWhen(n) => self.write_case_when(n),
            Node::NullTest(n) => self.write_null_test(n),
            Node::CurrentOfExpr(n) => self.write_current_of_expr(n),
            Node::TargetEntry(n) => self.write_target_entry(n),
            Node::RangeTblRef(n) => self.write_range_tbl_ref(n),
            Node::JoinExpr(n) => self.write_join_expr(n),
            Node::FromExpr(n) => self.write_from_expr(n),
            Node::OuterJoinInfo(n) => self.write_outer_join_info(n),
            Node::IndexOptInfo(n) => self.write_index_opt_info(n),
            Node::TupleDescNode(n) => self.write_tuple_desc_node(n),

            /* parse tree */
            Node::Query(n) => self.write_query(n),
            Node::RangeTblEntry(n) => self.write_range_tbl_entry(n),
            Node::AExpr(n) => self.write_a_expr(n),
            Node::ColumnRef(n) => self.write_column_ref(n),
            Node::ParamRef(n) => self.write_param_ref(n),
            Node::AConst(n) => self.write_a_const(n),
            Node::TypeName(n) => self.write_type_name(n),
            Node::TypeCast(n) => self.write_type_cast(n),
            Node::ResTarget(n) => self.write_res_target(n),
            Node::FuncCall(n) => self.write_func_call(n),
            Node::SortClause(n) => self.write_sort_clause(n),
            Node::GroupClause(n) => self.write_group_clause(n),
            Node::RowMarkClause(n) => self.write_row_mark_clause(n),
            Node::CommonTableExpr(n) => self.write_common_table_expr(n),
            Node::DefElem(n) => self.write_def_elem(n),
            Node::Constraint(n) => self.write_constraint(n),
            Node::ColumnDef(n) => self.write_column_def(n),
            Node::CreateStmt(n) => self.write_create_stmt(n),
            Node::Partition(n) => self.write_partition(n),
            Node::PartitionRule(n) => self.write_partition_rule(n),
            Node::CreateDomainStmt(n) => self.write_create_domain_stmt(n),
            Node::AlterDomainStmt(n) => self.write_alter_domain_stmt(n),
            Node::PartitionSpec(n) => self.write_partition_spec(n),
            Node::PartitionBoundSpec(n) => self.write_partition_bound_spec(n),
            Node::AlterPartitionCmd(n) => self.write_alter_partition_cmd(n),
            Node::CreateQueueStmt(n) => self.write_create_queue_stmt(n),
            Node::AlterQueueStmt(n) => self.write_alter_queue_stmt(n),

            Node::PlannerOnly(n) => Err(EncodeError::UnsupportedKind { tag: n.tag }),
        }
    }

    /// A single-child field.
    pub fn write_child(&mut self, ptr: &NodePtr) -> Result<WriteLen> {
        self.write_node(ptr.as_deref())
    }

    /// Container tag and element count, then the elements in order. An absent list writes
    /// tag zero only.
    pub fn write_list(&mut self, list: Option<&List>) -> Result<WriteLen> {
        let list = match list {
            None => return Ok(self.write_tag(NodeTag::Invalid)),
            Some(list) => list,
        };

        let mut w_len = self.write_tag(list.tag());
        let elems_ct = ElemCount::from_len("list", list.len())?;
        w_len += self.write_scalar(*elems_ct);

        match list {
            List::Nodes(nodes) => {
                for node in nodes {
                    w_len += self.write_node(Some(node))?;
                }
            }
            List::Ints(ints) => w_len += self.write_array(ints),
            List::Oids(oids) => w_len += self.write_array(oids),
        }

        Ok(w_len)
    }

    /// A field that must hold a literal.
    pub fn write_literal(&mut self, ptr: &NodePtr) -> Result<WriteLen> {
        match ptr.as_deref() {
            Some(Node::Value(val)) => self.write_value(val),
            Some(node) => Err(EncodeError::MalformedLiteral { tag: node.tag() }),
            None => Err(EncodeError::MalformedLiteral {
                tag: NodeTag::Invalid,
            }),
        }
    }

    /// See [`WireBuf::write_datum`]. The sizer comes from the context.
    pub fn write_datum_field(&mut self, dat: &Datum, typlen: i32, typbyval: bool) -> Result<WriteLen> {
        let sizer = self.cx.sizer();
        self.w.write_datum(dat, typlen, typbyval, sizer)
    }
}
