use anyhow::{anyhow, bail, Result};
use num_traits::FromPrimitive;
use plancodec_encoder::wire::WIRE_SENTINEL;
use plancodec_types::enums::{AExprKind, ConstrType, RteKind};
use plancodec_types::*;
use std::any;
use std::io::{Cursor, Read};
use std::mem;

/// Reads back what the encoder writes, for every kind the encoder supports.
///
/// The reader must be told the mode out of band, exactly as the production decoder is.
pub struct WireReader<'a> {
    r: Cursor<&'a [u8]>,
    stripped: bool,
}

macro_rules! read_scalar_fns {
    ($($name:ident: $t:ty),*) => {
        $(
            pub fn $name(&mut self) -> Result<$t> {
                let mut buf = [0u8; mem::size_of::<$t>()];
                self.r.read_exact(&mut buf)?;
                Ok(<$t>::from_ne_bytes(buf))
            }
        )*
    };
}

/* Primitives. */
impl<'a> WireReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            r: Cursor::new(bytes),
            stripped: false,
        }
    }

    pub fn new_stripped(bytes: &'a [u8]) -> Self {
        Self {
            r: Cursor::new(bytes),
            stripped: true,
        }
    }

    pub fn pos(&self) -> usize {
        self.r.position() as usize
    }

    read_scalar_fns!(
        read_i16: i16,
        read_u16: u16,
        read_i32: i32,
        read_u32: u32,
        read_i64: i64,
        read_u64: u64,
        read_f64: f64
    );

    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.r.read_exact(&mut buf)?;
        Ok(buf)
    }

    pub fn read_char(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.r.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        match self.read_char()? {
            0 => Ok(false),
            1 => Ok(true),
            b => Err(anyhow!("Invalid bool byte {b}")),
        }
    }

    pub fn read_enum<E: FromPrimitive>(&mut self) -> Result<E> {
        let int = self.read_i16()?;
        E::from_i16(int).ok_or(anyhow!("Unknown {} {int}", any::type_name::<E>()))
    }

    pub fn read_enum_int<E: FromPrimitive>(&mut self) -> Result<E> {
        let int = self.read_i32()?;
        E::from_i32(int).ok_or(anyhow!("Unknown {} {int}", any::type_name::<E>()))
    }

    /// Absent and empty are indistinguishable; both come back absent.
    pub fn read_str(&mut self) -> Result<Option<String>> {
        let len = self.read_i32()?;
        if len == 0 {
            return Ok(None);
        }
        let bytes = self.read_bytes(len as usize)?;
        Ok(Some(String::from_utf8(bytes)?))
    }

    pub fn read_tag(&mut self) -> Result<NodeTag> {
        let int = NodeTagInt::from(self.read_u16()?);
        NodeTag::try_from(int)
    }

    fn read_count(&mut self) -> Result<usize> {
        let ct = self.read_i32()?;
        usize::try_from(ct).map_err(|_| anyhow!("Negative count {ct}"))
    }

    fn read_i16s(&mut self, ct: usize) -> Result<Vec<i16>> {
        (0..ct).map(|_| self.read_i16()).collect()
    }

    fn read_i32s(&mut self, ct: usize) -> Result<Vec<i32>> {
        (0..ct).map(|_| self.read_i32()).collect()
    }

    fn read_u32s(&mut self, ct: usize) -> Result<Vec<u32>> {
        (0..ct).map(|_| self.read_u32()).collect()
    }

    /// A zero word count comes back absent.
    pub fn read_bitmapset(&mut self) -> Result<Option<Bitmapset>> {
        let words_ct = self.read_count()?;
        if words_ct == 0 {
            return Ok(None);
        }
        Ok(Some(Bitmapset::from_words(self.read_u32s(words_ct)?)))
    }

    pub fn read_datum(&mut self, typbyval: bool) -> Result<Datum> {
        if typbyval {
            return Ok(Datum::Word(self.read_u64()?));
        }
        match self.read_u64()? {
            0 => Ok(Datum::Ref(None)),
            len => Ok(Datum::Ref(Some(self.read_bytes(len as usize)?))),
        }
    }

    /// The trailing sentinel, then nothing.
    pub fn finish(mut self) -> Result<()> {
        let sentinel = self.read_u16()?;
        if sentinel != WIRE_SENTINEL {
            bail!("Expected sentinel, found {sentinel:#x} at {}", self.pos() - 2);
        }
        let rest = self.r.get_ref().len() - self.pos();
        if rest != 0 {
            bail!("{rest} trailing bytes");
        }
        Ok(())
    }
}

/* Containers and literals. */
impl<'a> WireReader<'a> {
    pub fn read_list(&mut self) -> Result<Option<List>> {
        match self.read_tag()? {
            NodeTag::Invalid => Ok(None),
            tag => self.read_list_body(tag).map(Some),
        }
    }

    fn read_list_body(&mut self, tag: NodeTag) -> Result<List> {
        let ct = self.read_count()?;
        let list = match tag {
            NodeTag::List => {
                let mut nodes = Vec::with_capacity(ct);
                for _ in 0..ct {
                    match self.read_node()? {
                        Some(node) => nodes.push(node),
                        None => bail!("Absent list element"),
                    }
                }
                List::Nodes(nodes)
            }
            NodeTag::IntList => List::Ints(self.read_i32s(ct)?),
            NodeTag::OidList => List::Oids(self.read_u32s(ct)?),
            tag => bail!("{tag:?} is not a container"),
        };
        Ok(list)
    }

    fn read_value_body(&mut self, tag: NodeTag) -> Result<Value> {
        let text = |r: &mut Self| -> Result<String> { Ok(r.read_str()?.unwrap_or_default()) };
        let val = match tag {
            NodeTag::Integer => Value::Integer(self.read_i64()?),
            NodeTag::Float => Value::Float(text(self)?),
            NodeTag::String => Value::String(text(self)?),
            NodeTag::BitString => Value::BitString(text(self)?),
            NodeTag::Null => Value::Null,
            tag => bail!("{tag:?} is not a literal"),
        };
        Ok(val)
    }

    pub fn read_child(&mut self) -> Result<NodePtr> {
        Ok(self.read_node()?.map(Box::new))
    }

    pub fn read_node(&mut self) -> Result<Option<Node>> {
        let tag = self.read_tag()?;
        let node = match tag {
            NodeTag::Invalid => return Ok(None),
            tag if tag.is_literal() => Node::Value(self.read_value_body(tag)?),
            tag if tag.is_container() => Node::List(self.read_list_body(tag)?),

            NodeTag::PlannedStmt => self.read_planned_stmt()?.into(),
            NodeTag::Result => self.read_result()?.into(),
            NodeTag::Append => self.read_append()?.into(),
            NodeTag::SeqScan => self.read_seq_scan()?.into(),
            NodeTag::IndexScan => self.read_index_scan()?.into(),
            NodeTag::SubqueryScan => self.read_subquery_scan()?.into(),
            NodeTag::FunctionScan => self.read_function_scan()?.into(),
            NodeTag::ValuesScan => self.read_values_scan()?.into(),
            NodeTag::NestLoop => self.read_nest_loop()?.into(),
            NodeTag::MergeJoin => self.read_merge_join()?.into(),
            NodeTag::HashJoin => self.read_hash_join()?.into(),
            NodeTag::Hash => self.read_hash()?.into(),
            NodeTag::Material => self.read_material()?.into(),
            NodeTag::Sort => self.read_sort()?.into(),
            NodeTag::Agg => self.read_agg()?.into(),
            NodeTag::WindowKey => self.read_window_key()?.into(),
            NodeTag::Window => self.read_window()?.into(),
            NodeTag::Unique => self.read_unique()?.into(),
            NodeTag::SetOp => self.read_set_op()?.into(),
            NodeTag::Limit => self.read_limit()?.into(),
            NodeTag::Motion => self.read_motion()?.into(),
            NodeTag::Flow => self.read_flow()?.into(),
            NodeTag::Slice => self.read_slice()?.into(),
            NodeTag::SliceTable => self.read_slice_table()?.into(),
            NodeTag::TupleDescNode => self.read_tuple_desc_node()?.into(),

            NodeTag::Alias => self.read_alias()?.into(),
            NodeTag::Var => self.read_var()?.into(),
            NodeTag::Const => self.read_const()?.into(),
            NodeTag::Param => self.read_param()?.into(),
            NodeTag::Aggref => self.read_aggref()?.into(),
            NodeTag::FuncExpr => self.read_func_expr()?.into(),
            NodeTag::OpExpr => self.read_op_expr()?.into(),
            NodeTag::BoolExpr => self.read_bool_expr()?.into(),
            NodeTag::SubLink => self.read_sub_link()?.into(),
            NodeTag::SubPlan => self.read_sub_plan()?.into(),
            NodeTag::RelabelType => self.read_relabel_type()?.into(),
            NodeTag::CaseExpr => self.read_case_expr()?.into(),
            NodeTag::CaseWhen => self.read_case_when()?.into(),
            NodeTag::NullTest => self.read_null_test()?.into(),
            NodeTag::CurrentOfExpr => self.read_current_of_expr()?.into(),
            NodeTag::TargetEntry => self.read_target_entry()?.into(),
            NodeTag::RangeTblRef => self.read_range_tbl_ref()?.into(),
            NodeTag::JoinExpr => self.read_join_expr()?.into(),
            NodeTag::FromExpr => self.read_from_expr()?.into(),
            NodeTag::OuterJoinInfo => self.read_outer_join_info()?.into(),
            NodeTag::IndexOptInfo => self.read_index_opt_info()?.into(),

            NodeTag::Query => self.read_query()?.into(),
            NodeTag::RangeTblEntry => self.read_range_tbl_entry()?.into(),
            NodeTag::CreateStmt => self.read_create_stmt()?.into(),
            NodeTag::CreateDomainStmt => self.read_create_domain_stmt()?.into(),
            NodeTag::AlterDomainStmt => self.read_alter_domain_stmt()?.into(),
            NodeTag::AlterPartitionCmd => self.read_alter_partition_cmd()?.into(),
            NodeTag::CreateQueueStmt => self.read_create_queue_stmt()?.into(),
            NodeTag::AlterQueueStmt => self.read_alter_queue_stmt()?.into(),
            NodeTag::AExpr => self.read_a_expr()?.into(),
            NodeTag::ColumnRef => self.read_column_ref()?.into(),
            NodeTag::ParamRef => self.read_param_ref()?.into(),
            NodeTag::AConst => self.read_a_const()?.into(),
            NodeTag::TypeName => self.read_type_name()?.into(),
            NodeTag::TypeCast => self.read_type_cast()?.into(),
            NodeTag::ResTarget => self.read_res_target()?.into(),
            NodeTag::FuncCall => self.read_func_call()?.into(),
            NodeTag::DefElem => self.read_def_elem()?.into(),
            NodeTag::SortClause => self.read_sort_clause()?.into(),
            NodeTag::GroupClause => self.read_group_clause()?.into(),
            NodeTag::RowMarkClause => self.read_row_mark_clause()?.into(),
            NodeTag::CommonTableExpr => self.read_common_table_expr()?.into(),
            NodeTag::Constraint => self.read_constraint()?.into(),
            NodeTag::ColumnDef => self.read_column_def()?.into(),
            NodeTag::Partition => self.read_partition()?.into(),
            NodeTag::PartitionRule => self.read_partition_rule()?.into(),
            NodeTag::PartitionSpec => self.read_partition_spec()?.into(),
            NodeTag::PartitionBoundSpec => self.read_partition_bound_spec()?.into(),

            tag => bail!("No reader for {tag:?}"),
        };
        Ok(Some(node))
    }
}

/* Plan tree. */
impl<'a> WireReader<'a> {
    fn read_plan_info(&mut self) -> Result<PlanInfo> {
        let mut plan = PlanInfo::default();
        if !self.stripped {
            plan.plan_node_id = self.read_i32()?;
            plan.plan_parent_node_id = self.read_i32()?;
            plan.startup_cost = self.read_f64()?;
            plan.total_cost = self.read_f64()?;
            plan.plan_rows = self.read_f64()?;
            plan.plan_width = self.read_i32()?;
        }
        plan.targetlist = self.read_list()?;
        plan.qual = self.read_list()?;
        plan.ext_param = self.read_bitmapset()?;
        plan.all_param = self.read_bitmapset()?;
        plan.n_param_exec = self.read_i32()?;
        if !self.stripped {
            plan.flow = self.read_child()?;
            plan.dispatch = self.read_enum_int()?;
            plan.direct_dispatch.is_direct_dispatch = self.read_bool()?;
            plan.direct_dispatch.content_ids = self.read_list()?;
            plan.n_motion_nodes = self.read_i32()?;
            plan.n_init_plans = self.read_i32()?;
            plan.slice_table = self.read_child()?;
        }
        plan.lefttree = self.read_child()?;
        plan.righttree = self.read_child()?;
        plan.init_plan = self.read_list()?;
        if !self.stripped {
            plan.operator_mem_kb = self.read_u64()?;
        }
        Ok(plan)
    }

    fn read_planned_stmt(&mut self) -> Result<PlannedStmt> {
        Ok(PlannedStmt {
            command_type: self.read_enum()?,
            plan_gen: self.read_enum()?,
            can_set_tag: self.read_bool()?,
            transient_plan: self.read_bool()?,
            plan_tree: self.read_child()?,
            rtable: self.read_list()?,
            result_relations: self.read_list()?,
            utility_stmt: self.read_child()?,
            into_clause: self.read_child()?,
            subplans: self.read_list()?,
            rewind_plan_ids: self.read_bitmapset()?,
            returning_lists: self.read_list()?,
            result_partitions: self.read_child()?,
            result_aosegnos: self.read_list()?,
            query_part_oids: self.read_list()?,
            query_parts_metadata: self.read_list()?,
            num_selectors_per_scan_id: self.read_list()?,
            row_marks: self.read_list()?,
            relation_oids: self.read_list()?,
            inval_items: self.read_list()?,
            n_cross_level_params: self.read_i32()?,
            n_motion_nodes: self.read_i32()?,
            n_init_plans: self.read_i32()?,
            slice_table: self.read_child()?,
            query_mem: self.read_u64()?,
            transient_type_records: self.read_list()?,
        })
    }

    fn read_result(&mut self) -> Result<ResultPlan> {
        Ok(ResultPlan {
            plan: self.read_plan_info()?,
            resconstantqual: self.read_child()?,
            hash_filter: self.read_bool()?,
            hash_list: self.read_list()?,
        })
    }

    fn read_scan_info(&mut self) -> Result<ScanInfo> {
        Ok(ScanInfo {
            plan: self.read_plan_info()?,
            scanrelid: self.read_u32()?,
            part_index: self.read_i32()?,
            part_index_printable: self.read_i32()?,
        })
    }

    fn read_join_info(&mut self) -> Result<JoinInfo> {
        Ok(JoinInfo {
            plan: self.read_plan_info()?,
            prefetch_inner: self.read_bool()?,
            jointype: self.read_enum()?,
            joinqual: self.read_list()?,
        })
    }

    fn read_append(&mut self) -> Result<Append> {
        Ok(Append {
            plan: self.read_plan_info()?,
            appendplans: self.read_list()?,
            is_target: self.read_bool()?,
            is_zapped: self.read_bool()?,
            has_xslice: self.read_bool()?,
        })
    }

    fn read_seq_scan(&mut self) -> Result<SeqScan> {
        Ok(SeqScan {
            scan: self.read_scan_info()?,
        })
    }

    fn read_index_scan(&mut self) -> Result<IndexScan> {
        Ok(IndexScan {
            scan: self.read_scan_info()?,
            indexid: self.read_u32()?,
            indexqual: self.read_list()?,
            indexqualorig: self.read_list()?,
            indexstrategy: self.read_list()?,
            indexsubtype: self.read_list()?,
            indexorderdir: self.read_enum()?,
        })
    }

    fn read_subquery_scan(&mut self) -> Result<SubqueryScan> {
        Ok(SubqueryScan {
            scan: self.read_scan_info()?,
            subplan: self.read_child()?,
        })
    }

    fn read_function_scan(&mut self) -> Result<FunctionScan> {
        Ok(FunctionScan {
            scan: self.read_scan_info()?,
        })
    }

    fn read_values_scan(&mut self) -> Result<ValuesScan> {
        Ok(ValuesScan {
            scan: self.read_scan_info()?,
            values_lists: self.read_list()?,
        })
    }

    fn read_nest_loop(&mut self) -> Result<NestLoop> {
        Ok(NestLoop {
            join: self.read_join_info()?,
            outernotreferencedbyinner: self.read_bool()?,
            shared_outer: self.read_bool()?,
            singleton_outer: self.read_bool()?,
        })
    }

    fn read_merge_join(&mut self) -> Result<MergeJoin> {
        Ok(MergeJoin {
            join: self.read_join_info()?,
            mergeclauses: self.read_list()?,
            unique_outer: self.read_bool()?,
        })
    }

    fn read_hash_join(&mut self) -> Result<HashJoin> {
        Ok(HashJoin {
            join: self.read_join_info()?,
            hashclauses: self.read_list()?,
            hashqualclauses: self.read_list()?,
        })
    }

    fn read_material(&mut self) -> Result<Material> {
        Ok(Material {
            plan: self.read_plan_info()?,
            cdb_strict: self.read_bool()?,
            share_type: self.read_enum()?,
            share_id: self.read_i32()?,
            driver_slice: self.read_i32()?,
            nsharer: self.read_i32()?,
            nsharer_xslice: self.read_i32()?,
        })
    }

    fn read_hash(&mut self) -> Result<Hash> {
        Ok(Hash {
            plan: self.read_plan_info()?,
            rescannable: self.read_bool()?,
        })
    }

    fn read_sort(&mut self) -> Result<Sort> {
        let plan = self.read_plan_info()?;
        let ct = self.read_count()?;
        Ok(Sort {
            plan,
            sort_col_idx: self.read_i16s(ct)?,
            sort_operators: self.read_u32s(ct)?,
            limit_offset: self.read_child()?,
            limit_count: self.read_child()?,
            noduplicates: self.read_bool()?,
            share_type: self.read_enum()?,
            share_id: self.read_i32()?,
            driver_slice: self.read_i32()?,
            nsharer: self.read_i32()?,
            nsharer_xslice: self.read_i32()?,
        })
    }

    fn read_agg(&mut self) -> Result<Agg> {
        let mut agg = Agg {
            plan: self.read_plan_info()?,
            aggstrategy: self.read_enum()?,
            ..Default::default()
        };
        let ct = self.read_count()?;
        agg.grp_col_idx = self.read_i16s(ct)?;
        if !self.stripped {
            agg.num_groups = self.read_i64()?;
            agg.trans_space = self.read_i32()?;
        }
        agg.num_null_cols = self.read_i32()?;
        agg.input_grouping = self.read_u64()?;
        agg.grouping = self.read_u64()?;
        agg.input_has_grouping = self.read_bool()?;
        agg.rollup_gs_times = self.read_i32()?;
        agg.last_agg = self.read_bool()?;
        agg.streaming = self.read_bool()?;
        Ok(agg)
    }

    fn read_window_key(&mut self) -> Result<WindowKey> {
        let ct = self.read_count()?;
        Ok(WindowKey {
            sort_col_idx: self.read_i16s(ct)?,
            sort_operators: self.read_u32s(ct)?,
            frame: self.read_child()?,
        })
    }

    fn read_window(&mut self) -> Result<Window> {
        let plan = self.read_plan_info()?;
        let ct = self.read_count()?;
        Ok(Window {
            plan,
            part_col_idx: self.read_i16s(ct)?,
            window_keys: self.read_list()?,
        })
    }

    fn read_unique(&mut self) -> Result<Unique> {
        let plan = self.read_plan_info()?;
        let ct = self.read_count()?;
        Ok(Unique {
            plan,
            uniq_col_idx: self.read_i16s(ct)?,
        })
    }

    fn read_set_op(&mut self) -> Result<SetOp> {
        let plan = self.read_plan_info()?;
        let cmd = self.read_enum()?;
        let ct = self.read_count()?;
        Ok(SetOp {
            plan,
            cmd,
            dup_col_idx: self.read_i16s(ct)?,
            flag_col_idx: self.read_i32()?,
        })
    }

    fn read_limit(&mut self) -> Result<Limit> {
        Ok(Limit {
            plan: self.read_plan_info()?,
            limit_offset: self.read_child()?,
            limit_count: self.read_child()?,
        })
    }

    fn read_motion(&mut self) -> Result<Motion> {
        let motion_id = self.read_i32()?;
        let motion_type = self.read_enum()?;
        let send_sorted = self.read_bool()?;
        let hash_expr = self.read_list()?;
        let hash_data_types = self.read_list()?;
        let seg_ct = self.read_count()?;
        let output_seg_idx = self.read_i32s(seg_ct)?;
        let sort_ct = self.read_count()?;
        let sort_col_idx = self.read_i16s(sort_ct)?;
        let sort_operators = self.read_u32s(sort_ct)?;
        let segid_col_idx = self.read_i32()?;
        Ok(Motion {
            plan: self.read_plan_info()?,
            motion_id,
            motion_type,
            send_sorted,
            hash_expr,
            hash_data_types,
            output_seg_idx,
            sort_col_idx,
            sort_operators,
            segid_col_idx,
        })
    }

    fn read_flow(&mut self) -> Result<Flow> {
        let flotype = self.read_enum()?;
        let req_move = self.read_enum()?;
        let locustype = self.read_enum()?;
        let segindex = self.read_i32()?;
        let ct = self.read_count()?;
        Ok(Flow {
            flotype,
            req_move,
            locustype,
            segindex,
            sort_col_idx: self.read_i16s(ct)?,
            sort_operators: self.read_u32s(ct)?,
            hash_expr: self.read_list()?,
            flow_before_req_move: self.read_child()?,
        })
    }
}

/* Dispatch metadata. */
impl<'a> WireReader<'a> {
    fn read_direct_dispatch(&mut self) -> Result<DirectDispatchInfo> {
        Ok(DirectDispatchInfo {
            is_direct_dispatch: self.read_bool()?,
            content_ids: self.read_list()?,
        })
    }

    fn read_slice(&mut self) -> Result<Slice> {
        Ok(Slice {
            slice_index: self.read_i32()?,
            root_index: self.read_i32()?,
            gang_type: self.read_enum()?,
            gang_size: self.read_i32()?,
            num_gang_members_to_be_active: self.read_i32()?,
            direct_dispatch: self.read_direct_dispatch()?,
            primary_gang_id: self.read_i32()?,
            parent_index: self.read_i32()?,
            children: self.read_list()?,
            primary_processes: self.read_list()?,
        })
    }

    fn read_slice_table(&mut self) -> Result<SliceTable> {
        Ok(SliceTable {
            n_motions: self.read_i32()?,
            n_init_plans: self.read_i32()?,
            local_slice: self.read_i32()?,
            slices: self.read_list()?,
            do_instrument: self.read_bool()?,
            ic_instance_id: self.read_u32()?,
        })
    }

    fn read_tuple_desc_node(&mut self) -> Result<TupleDescNode> {
        let natts = self.read_i32()?;
        let ct = self.read_count()?;
        let mut attrs = Vec::with_capacity(ct);
        for _ in 0..ct {
            let mut attr = [0u8; ATTRIBUTE_FIXED_PART_SIZE];
            self.r.read_exact(&mut attr)?;
            attrs.push(attr);
        }
        Ok(TupleDescNode {
            natts,
            tuple: TupleDesc {
                attrs,
                tdtypeid: self.read_u32()?,
                tdtypmod: self.read_i32()?,
                tdqdtypmod: self.read_i32()?,
                tdhasoid: self.read_bool()?,
                tdrefcount: self.read_i32()?,
            },
        })
    }
}

/* Expressions. */
impl<'a> WireReader<'a> {
    fn read_alias(&mut self) -> Result<Alias> {
        Ok(Alias {
            aliasname: self.read_str()?,
            colnames: self.read_list()?,
        })
    }

    fn read_var(&mut self) -> Result<Var> {
        Ok(Var {
            varno: self.read_u32()?,
            varattno: self.read_i16()?,
            vartype: self.read_u32()?,
            vartypmod: self.read_i32()?,
            varlevelsup: self.read_u32()?,
            varnoold: self.read_u32()?,
            varoattno: self.read_i16()?,
        })
    }

    fn read_const(&mut self) -> Result<Const> {
        let mut node = Const {
            consttype: self.read_u32()?,
            constlen: self.read_i32()?,
            constbyval: self.read_bool()?,
            constisnull: self.read_bool()?,
            ..Default::default()
        };
        if !node.constisnull {
            node.constvalue = self.read_datum(node.constbyval)?;
        }
        Ok(node)
    }

    fn read_param(&mut self) -> Result<Param> {
        Ok(Param {
            paramkind: self.read_enum()?,
            paramid: self.read_i32()?,
            paramtype: self.read_u32()?,
        })
    }

    fn read_aggref(&mut self) -> Result<Aggref> {
        Ok(Aggref {
            aggfnoid: self.read_u32()?,
            aggtype: self.read_u32()?,
            args: self.read_list()?,
            agglevelsup: self.read_u32()?,
            aggstar: self.read_bool()?,
            aggdistinct: self.read_bool()?,
            aggstage: self.read_enum()?,
            aggorder: self.read_child()?,
        })
    }

    fn read_func_expr(&mut self) -> Result<FuncExpr> {
        Ok(FuncExpr {
            funcid: self.read_u32()?,
            funcresulttype: self.read_u32()?,
            funcretset: self.read_bool()?,
            funcformat: self.read_enum()?,
            args: self.read_list()?,
            is_tablefunc: self.read_bool()?,
        })
    }

    fn read_op_expr(&mut self) -> Result<OpExpr> {
        Ok(OpExpr {
            opno: self.read_u32()?,
            opfuncid: self.read_u32()?,
            opresulttype: self.read_u32()?,
            opretset: self.read_bool()?,
            args: self.read_list()?,
        })
    }

    fn read_bool_expr(&mut self) -> Result<BoolExpr> {
        Ok(BoolExpr {
            boolop: self.read_enum()?,
            args: self.read_list()?,
        })
    }

    fn read_sub_link(&mut self) -> Result<SubLink> {
        Ok(SubLink {
            sub_link_type: self.read_enum()?,
            testexpr: self.read_child()?,
            oper_name: self.read_list()?,
            location: self.read_i32()?,
            subselect: self.read_child()?,
        })
    }

    fn read_sub_plan(&mut self) -> Result<SubPlan> {
        Ok(SubPlan {
            sub_link_type: self.read_enum()?,
            testexpr: self.read_child()?,
            param_ids: self.read_list()?,
            plan_id: self.read_i32()?,
            first_col_type: self.read_u32()?,
            first_col_typmod: self.read_i32()?,
            use_hash_table: self.read_bool()?,
            unknown_eq_false: self.read_bool()?,
            is_initplan: self.read_bool()?,
            is_multirow: self.read_bool()?,
            set_param: self.read_list()?,
            par_param: self.read_list()?,
            args: self.read_list()?,
            ext_param: self.read_bitmapset()?,
        })
    }

    fn read_relabel_type(&mut self) -> Result<RelabelType> {
        Ok(RelabelType {
            arg: self.read_child()?,
            resulttype: self.read_u32()?,
            resulttypmod: self.read_i32()?,
            relabelformat: self.read_enum()?,
        })
    }

    fn read_case_expr(&mut self) -> Result<CaseExpr> {
        Ok(CaseExpr {
            casetype: self.read_u32()?,
            arg: self.read_child()?,
            args: self.read_list()?,
            defresult: self.read_child()?,
        })
    }

    fn read_case_when(&mut self) -> Result<CaseWhen> {
        Ok(CaseWhen {
            expr: self.read_child()?,
            result: self.read_child()?,
        })
    }

    fn read_null_test(&mut self) -> Result<NullTest> {
        Ok(NullTest {
            arg: self.read_child()?,
            nulltesttype: self.read_enum()?,
        })
    }

    fn read_current_of_expr(&mut self) -> Result<CurrentOfExpr> {
        let cursor_name = self.read_str()?;
        let cvarno = self.read_u32()?;
        let target_relid = self.read_u32()?;
        let gp_segment_id = self.read_i32()?;
        let mut ctid = [0u8; ITEM_POINTER_SIZE];
        self.r.read_exact(&mut ctid)?;
        Ok(CurrentOfExpr {
            cursor_name,
            cvarno,
            target_relid,
            gp_segment_id,
            ctid,
            tableoid: self.read_u32()?,
        })
    }

    fn read_target_entry(&mut self) -> Result<TargetEntry> {
        Ok(TargetEntry {
            expr: self.read_child()?,
            resno: self.read_i16()?,
            resname: self.read_str()?,
            ressortgroupref: self.read_u32()?,
            resorigtbl: self.read_u32()?,
            resorigcol: self.read_i16()?,
            resjunk: self.read_bool()?,
        })
    }

    fn read_range_tbl_ref(&mut self) -> Result<RangeTblRef> {
        Ok(RangeTblRef {
            rtindex: self.read_i32()?,
        })
    }

    fn read_join_expr(&mut self) -> Result<JoinExpr> {
        Ok(JoinExpr {
            jointype: self.read_enum()?,
            is_natural: self.read_bool()?,
            larg: self.read_child()?,
            rarg: self.read_child()?,
            using_clause: self.read_list()?,
            quals: self.read_child()?,
            alias: self.read_child()?,
            rtindex: self.read_i32()?,
        })
    }

    fn read_from_expr(&mut self) -> Result<FromExpr> {
        Ok(FromExpr {
            fromlist: self.read_list()?,
            quals: self.read_child()?,
        })
    }

    fn read_outer_join_info(&mut self) -> Result<OuterJoinInfo> {
        Ok(OuterJoinInfo {
            min_lefthand: self.read_bitmapset()?,
            min_righthand: self.read_bitmapset()?,
            join_type: self.read_enum()?,
            lhs_strict: self.read_bool()?,
        })
    }

    fn read_index_opt_info(&mut self) -> Result<IndexOptInfo> {
        let indexoid = self.read_u32()?;
        let pages = self.read_u32()?;
        let tuples = self.read_f64()?;
        let ct = self.read_count()?;
        Ok(IndexOptInfo {
            indexoid,
            pages,
            tuples,
            classlist: self.read_u32s(ct)?,
            indexkeys: self.read_i32s(ct)?,
            ordering: self.read_u32s(ct)?,
            relam: self.read_u32()?,
            amcostestimate: self.read_u32()?,
            indexprs: self.read_list()?,
            indpred: self.read_list()?,
            pred_ok: self.read_bool()?,
            unique: self.read_bool()?,
            amoptionalkey: self.read_bool()?,
            cdb_default_stats_used: self.read_bool()?,
        })
    }
}

/* Parse tree. */
impl<'a> WireReader<'a> {
    fn read_query(&mut self) -> Result<Query> {
        Ok(Query {
            command_type: self.read_enum()?,
            query_source: self.read_enum()?,
            can_set_tag: self.read_bool()?,
            utility_stmt: self.read_child()?,
            result_relation: self.read_i32()?,
            into_clause: self.read_child()?,
            has_aggs: self.read_bool()?,
            has_wind_funcs: self.read_bool()?,
            has_sub_links: self.read_bool()?,
            rtable: self.read_list()?,
            jointree: self.read_child()?,
            target_list: self.read_list()?,
            returning_list: self.read_list()?,
            group_clause: self.read_list()?,
            having_qual: self.read_child()?,
            window_clause: self.read_list()?,
            distinct_clause: self.read_list()?,
            sort_clause: self.read_list()?,
            scatter_clause: self.read_list()?,
            cte_list: self.read_list()?,
            has_recursive: self.read_bool()?,
            has_modifying_cte: self.read_bool()?,
            limit_offset: self.read_child()?,
            limit_count: self.read_child()?,
            row_marks: self.read_list()?,
            set_operations: self.read_child()?,
            result_relations: self.read_list()?,
            result_partitions: self.read_child()?,
            result_aosegnos: self.read_list()?,
            returning_lists: self.read_list()?,
        })
    }

    fn read_range_tbl_entry(&mut self) -> Result<RangeTblEntry> {
        let mut rte = RangeTblEntry {
            alias: self.read_child()?,
            eref: self.read_child()?,
            rtekind: self.read_enum()?,
            ..Default::default()
        };

        match rte.rtekind {
            RteKind::Relation | RteKind::Special => rte.relid = self.read_u32()?,
            RteKind::Subquery => rte.subquery = self.read_child()?,
            RteKind::Cte => {
                rte.ctename = self.read_str()?;
                rte.ctelevelsup = self.read_u32()?;
                rte.self_reference = self.read_bool()?;
                rte.ctecoltypes = self.read_list()?;
                rte.ctecoltypmods = self.read_list()?;
            }
            RteKind::Function => {
                rte.funcexpr = self.read_child()?;
                rte.funccoltypes = self.read_list()?;
                rte.funccoltypmods = self.read_list()?;
            }
            RteKind::TableFunction => {
                rte.subquery = self.read_child()?;
                rte.funcexpr = self.read_child()?;
                rte.funccoltypes = self.read_list()?;
                rte.funccoltypmods = self.read_list()?;
                rte.funcuserdata = match self.read_datum(false)? {
                    Datum::Ref(bytes) => bytes,
                    Datum::Word(_) => unreachable!(),
                };
            }
            RteKind::Values => rte.values_lists = self.read_list()?,
            RteKind::Join => {
                rte.jointype = self.read_enum()?;
                rte.joinaliasvars = self.read_list()?;
            }
            RteKind::Void => {}
        }

        rte.inh = self.read_bool()?;
        rte.in_from_cl = self.read_bool()?;
        rte.required_perms = self.read_u32()?;
        rte.check_as_user = self.read_u32()?;
        rte.force_dist_random = self.read_bool()?;
        Ok(rte)
    }

    fn read_a_const(&mut self) -> Result<AConst> {
        let tag = self.read_tag()?;
        let val = Node::Value(self.read_value_body(tag)?);
        Ok(AConst {
            val: val.into_ptr(),
            typname: self.read_child()?,
            location: self.read_i32()?,
        })
    }

    fn read_sort_clause(&mut self) -> Result<SortClause> {
        Ok(SortClause {
            tle_sort_group_ref: self.read_u32()?,
            sortop: self.read_u32()?,
            nulls_first: self.read_bool()?,
        })
    }

    fn read_group_clause(&mut self) -> Result<GroupClause> {
        Ok(GroupClause {
            tle_sort_group_ref: self.read_u32()?,
            sortop: self.read_u32()?,
            nulls_first: self.read_bool()?,
        })
    }

    fn read_row_mark_clause(&mut self) -> Result<RowMarkClause> {
        Ok(RowMarkClause {
            rti: self.read_u32()?,
            for_update: self.read_bool()?,
            no_wait: self.read_bool()?,
        })
    }

    fn read_common_table_expr(&mut self) -> Result<CommonTableExpr> {
        Ok(CommonTableExpr {
            ctename: self.read_str()?,
            aliascolnames: self.read_list()?,
            ctequery: self.read_child()?,
            location: self.read_i32()?,
            cterecursive: self.read_bool()?,
            cterefcount: self.read_i32()?,
            ctecolnames: self.read_list()?,
            ctecoltypes: self.read_list()?,
            ctecoltypmods: self.read_list()?,
        })
    }

    fn read_a_expr(&mut self) -> Result<AExpr> {
        let kind = self.read_enum()?;
        let name = match kind {
            AExprKind::And | AExprKind::Or | AExprKind::Not => None,
            _ => self.read_list()?,
        };
        Ok(AExpr {
            kind,
            name,
            lexpr: self.read_child()?,
            rexpr: self.read_child()?,
            location: self.read_i32()?,
        })
    }

    fn read_column_ref(&mut self) -> Result<ColumnRef> {
        Ok(ColumnRef {
            fields: self.read_list()?,
            location: self.read_i32()?,
        })
    }

    fn read_param_ref(&mut self) -> Result<ParamRef> {
        Ok(ParamRef {
            number: self.read_i32()?,
            location: self.read_i32()?,
        })
    }

    fn read_type_name(&mut self) -> Result<TypeName> {
        Ok(TypeName {
            names: self.read_list()?,
            typid: self.read_u32()?,
            timezone: self.read_bool()?,
            setof: self.read_bool()?,
            pct_type: self.read_bool()?,
            typmod: self.read_i32()?,
            array_bounds: self.read_list()?,
            location: self.read_i32()?,
        })
    }

    fn read_type_cast(&mut self) -> Result<TypeCast> {
        Ok(TypeCast {
            arg: self.read_child()?,
            typname: self.read_child()?,
        })
    }

    fn read_res_target(&mut self) -> Result<ResTarget> {
        Ok(ResTarget {
            name: self.read_str()?,
            indirection: self.read_list()?,
            val: self.read_child()?,
            location: self.read_i32()?,
        })
    }

    fn read_func_call(&mut self) -> Result<FuncCall> {
        Ok(FuncCall {
            funcname: self.read_list()?,
            args: self.read_list()?,
            agg_order: self.read_list()?,
            agg_star: self.read_bool()?,
            agg_distinct: self.read_bool()?,
            func_variadic: self.read_bool()?,
            over: self.read_child()?,
            location: self.read_i32()?,
        })
    }

    fn read_def_elem(&mut self) -> Result<DefElem> {
        Ok(DefElem {
            defname: self.read_str()?,
            arg: self.read_child()?,
            defaction: self.read_enum()?,
        })
    }
}

/* DDL. */
impl<'a> WireReader<'a> {
    fn read_create_stmt(&mut self) -> Result<CreateStmt> {
        Ok(CreateStmt {
            relation: self.read_child()?,
            table_elts: self.read_list()?,
            inh_relations: self.read_list()?,
            inh_oids: self.read_list()?,
            parent_oid_count: self.read_i32()?,
            constraints: self.read_list()?,
            options: self.read_list()?,
            oncommit: self.read_enum()?,
            tablespacename: self.read_str()?,
            distributed_by: self.read_list()?,
            oid_info: TableOidInfo {
                rel_oid: self.read_u32()?,
                comptype_oid: self.read_u32()?,
                toast_oid: self.read_u32()?,
                toast_index_oid: self.read_u32()?,
                toast_comptype_oid: self.read_u32()?,
                aoseg_oid: self.read_u32()?,
                aoseg_index_oid: self.read_u32()?,
                aoseg_comptype_oid: self.read_u32()?,
                aovisimap_oid: self.read_u32()?,
                aovisimap_index_oid: self.read_u32()?,
                aovisimap_comptype_oid: self.read_u32()?,
                aoblkdir_oid: self.read_u32()?,
                aoblkdir_index_oid: self.read_u32()?,
                aoblkdir_comptype_oid: self.read_u32()?,
            },
            rel_kind: self.read_char()?,
            rel_storage: self.read_char()?,
            is_part_child: self.read_bool()?,
            is_add_part: self.read_bool()?,
            is_split_part: self.read_bool()?,
            ownerid: self.read_u32()?,
            build_ao_blkdir: self.read_bool()?,
            is_error_table: self.read_bool()?,
            attr_encodings: self.read_list()?,
        })
    }

    fn read_create_domain_stmt(&mut self) -> Result<CreateDomainStmt> {
        Ok(CreateDomainStmt {
            domainname: self.read_list()?,
            typname: self.read_child()?,
            constraints: self.read_list()?,
            domain_oid: self.read_u32()?,
        })
    }

    fn read_alter_domain_stmt(&mut self) -> Result<AlterDomainStmt> {
        Ok(AlterDomainStmt {
            subtype: self.read_char()?,
            typname: self.read_list()?,
            name: self.read_str()?,
            def: self.read_child()?,
            behavior: self.read_enum()?,
        })
    }

    fn read_alter_partition_cmd(&mut self) -> Result<AlterPartitionCmd> {
        Ok(AlterPartitionCmd {
            partid: self.read_child()?,
            arg1: self.read_child()?,
            arg2: self.read_child()?,
            new_oids: self.read_list()?,
        })
    }

    fn read_create_queue_stmt(&mut self) -> Result<CreateQueueStmt> {
        Ok(CreateQueueStmt {
            queue: self.read_str()?,
            options: self.read_list()?,
            queue_oid: self.read_u32()?,
            optids: self.read_list()?,
        })
    }

    fn read_alter_queue_stmt(&mut self) -> Result<AlterQueueStmt> {
        Ok(AlterQueueStmt {
            queue: self.read_str()?,
            options: self.read_list()?,
            optids: self.read_list()?,
        })
    }

    fn read_constraint(&mut self) -> Result<Constraint> {
        let mut con = Constraint {
            name: self.read_str()?,
            conoid: self.read_u32()?,
            contype: self.read_enum()?,
            ..Default::default()
        };
        match con.contype {
            ConstrType::Primary | ConstrType::Unique => {
                con.keys = self.read_list()?;
                con.options = self.read_list()?;
                con.indexspace = self.read_str()?;
            }
            ConstrType::Check | ConstrType::Default => {
                con.raw_expr = self.read_child()?;
                con.cooked_expr = self.read_str()?;
            }
            _ => {}
        }
        Ok(con)
    }

    fn read_column_def(&mut self) -> Result<ColumnDef> {
        Ok(ColumnDef {
            colname: self.read_str()?,
            typname: self.read_child()?,
            inhcount: self.read_i32()?,
            is_local: self.read_bool()?,
            is_not_null: self.read_bool()?,
            attnum: self.read_i32()?,
            default_oid: self.read_u32()?,
            raw_default: self.read_child()?,
            default_is_null: self.read_bool()?,
            cooked_default: self.read_str()?,
            constraints: self.read_list()?,
            encoding: self.read_list()?,
        })
    }

    fn read_partition(&mut self) -> Result<Partition> {
        let partid = self.read_u32()?;
        let parrelid = self.read_u32()?;
        let parkind = self.read_char()?;
        let parlevel = self.read_i32()?;
        let paristemplate = self.read_bool()?;
        let parnatts = self.read_i16()?;
        let ct = usize::try_from(parnatts).map_err(|_| anyhow!("Negative count {parnatts}"))?;
        Ok(Partition {
            partid,
            parrelid,
            parkind,
            parlevel,
            paristemplate,
            paratts: self.read_i16s(ct)?,
            parclass: self.read_u32s(ct)?,
        })
    }

    fn read_partition_rule(&mut self) -> Result<PartitionRule> {
        Ok(PartitionRule {
            parruleid: self.read_u32()?,
            paroid: self.read_u32()?,
            parchildrelid: self.read_u32()?,
            parparentoid: self.read_u32()?,
            parisdefault: self.read_bool()?,
            parname: self.read_str()?,
            parrangestart: self.read_child()?,
            parrangestartincl: self.read_bool()?,
            parrangeend: self.read_child()?,
            parrangeendincl: self.read_bool()?,
            parrangeevery: self.read_child()?,
            parlistvalues: self.read_list()?,
            parruleord: self.read_i16()?,
            parreloptions: self.read_list()?,
            partemplatespace_id: self.read_u32()?,
            children: self.read_child()?,
        })
    }

    fn read_partition_spec(&mut self) -> Result<PartitionSpec> {
        Ok(PartitionSpec {
            part_elem: self.read_list()?,
            sub_spec: self.read_child()?,
            istemplate: self.read_bool()?,
            location: self.read_i32()?,
            enc_clauses: self.read_list()?,
        })
    }

    fn read_partition_bound_spec(&mut self) -> Result<PartitionBoundSpec> {
        Ok(PartitionBoundSpec {
            part_start: self.read_child()?,
            part_end: self.read_child()?,
            part_every: self.read_child()?,
            location: self.read_i32()?,
        })
    }
}
