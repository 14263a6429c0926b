use crate::dispatch::NodeWriter;
use crate::error::Result;
use crate::wire::{shared_len, ShortCount, WriteLen, TYPLEN_VARLENA};
use plancodec_types::enums::{AExprKind, ConstrType, RteKind};
use plancodec_types::{
    AConst, AExpr, AlterDomainStmt, AlterPartitionCmd, AlterQueueStmt, ColumnDef, ColumnRef,
    CommonTableExpr, Constraint, CreateDomainStmt, CreateQueueStmt, CreateStmt, Datum, DefElem,
    FuncCall, GroupClause, NodeTag, ParamRef, Partition, PartitionBoundSpec, PartitionRule,
    PartitionSpec, Query, RangeTblEntry, ResTarget, RowMarkClause, SortClause, TableOidInfo,
    TypeCast, TypeName,
};

/* Statements. */
impl NodeWriter<'_> {
    pub(crate) fn write_query(&mut self, node: &Query) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Query);

        w_len += self.write_enum(node.command_type);
        w_len += self.write_enum(node.query_source);
        w_len += self.write_bool(node.can_set_tag);

        w_len += self.write_child(&node.utility_stmt)?;
        w_len += self.write_scalar(node.result_relation);
        w_len += self.write_child(&node.into_clause)?;
        w_len += self.write_bool(node.has_aggs);
        w_len += self.write_bool(node.has_wind_funcs);
        w_len += self.write_bool(node.has_sub_links);

        w_len += self.write_list(node.rtable.as_ref())?;
        w_len += self.write_child(&node.jointree)?;
        w_len += self.write_list(node.target_list.as_ref())?;
        w_len += self.write_list(node.returning_list.as_ref())?;
        w_len += self.write_list(node.group_clause.as_ref())?;
        w_len += self.write_child(&node.having_qual)?;
        w_len += self.write_list(node.window_clause.as_ref())?;
        w_len += self.write_list(node.distinct_clause.as_ref())?;
        w_len += self.write_list(node.sort_clause.as_ref())?;
        w_len += self.write_list(node.scatter_clause.as_ref())?;
        w_len += self.write_list(node.cte_list.as_ref())?;
        w_len += self.write_bool(node.has_recursive);
        w_len += self.write_bool(node.has_modifying_cte);
        w_len += self.write_child(&node.limit_offset)?;
        w_len += self.write_child(&node.limit_count)?;
        w_len += self.write_list(node.row_marks.as_ref())?;
        w_len += self.write_child(&node.set_operations)?;
        w_len += self.write_list(node.result_relations.as_ref())?;
        w_len += self.write_child(&node.result_partitions)?;
        w_len += self.write_list(node.result_aosegnos.as_ref())?;
        w_len += self.write_list(node.returning_lists.as_ref())?;

        Ok(w_len)
    }

    /// Only the attributes of the entry's own kind follow the common prefix.
    pub(crate) fn write_range_tbl_entry(&mut self, node: &RangeTblEntry) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::RangeTblEntry);

        w_len += self.write_child(&node.alias)?;
        w_len += self.write_child(&node.eref)?;
        w_len += self.write_enum(node.rtekind);

        match node.rtekind {
            RteKind::Relation | RteKind::Special => {
                w_len += self.write_scalar(node.relid);
            }
            RteKind::Subquery => {
                w_len += self.write_child(&node.subquery)?;
            }
            RteKind::Cte => {
                w_len += self.write_str(node.ctename.as_deref())?;
                w_len += self.write_scalar(node.ctelevelsup);
                w_len += self.write_bool(node.self_reference);
                w_len += self.write_list(node.ctecoltypes.as_ref())?;
                w_len += self.write_list(node.ctecoltypmods.as_ref())?;
            }
            RteKind::Function => {
                w_len += self.write_child(&node.funcexpr)?;
                w_len += self.write_list(node.funccoltypes.as_ref())?;
                w_len += self.write_list(node.funccoltypmods.as_ref())?;
            }
            RteKind::TableFunction => {
                w_len += self.write_child(&node.subquery)?;
                w_len += self.write_child(&node.funcexpr)?;
                w_len += self.write_list(node.funccoltypes.as_ref())?;
                w_len += self.write_list(node.funccoltypmods.as_ref())?;

                let userdata = Datum::Ref(node.funcuserdata.clone());
                w_len += self.write_datum_field(&userdata, TYPLEN_VARLENA, false)?;
            }
            RteKind::Values => {
                w_len += self.write_list(node.values_lists.as_ref())?;
            }
            RteKind::Join => {
                w_len += self.write_enum(node.jointype);
                w_len += self.write_list(node.joinaliasvars.as_ref())?;
            }
            RteKind::Void => {}
        }

        w_len += self.write_bool(node.inh);
        w_len += self.write_bool(node.in_from_cl);
        w_len += self.write_scalar(node.required_perms);
        w_len += self.write_scalar(node.check_as_user);
        w_len += self.write_bool(node.force_dist_random);

        Ok(w_len)
    }

    pub(crate) fn write_create_stmt(&mut self, node: &CreateStmt) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::CreateStmt);

        w_len += self.write_child(&node.relation)?;
        w_len += self.write_list(node.table_elts.as_ref())?;
        w_len += self.write_list(node.inh_relations.as_ref())?;
        w_len += self.write_list(node.inh_oids.as_ref())?;
        w_len += self.write_scalar(node.parent_oid_count);
        w_len += self.write_list(node.constraints.as_ref())?;
        w_len += self.write_list(node.options.as_ref())?;
        w_len += self.write_enum(node.oncommit);
        w_len += self.write_str(node.tablespacename.as_deref())?;
        w_len += self.write_list(node.distributed_by.as_ref())?;
        w_len += self.write_table_oid_info(&node.oid_info);
        w_len += self.write_char(node.rel_kind);
        w_len += self.write_char(node.rel_storage);
        w_len += self.write_bool(node.is_part_child);
        w_len += self.write_bool(node.is_add_part);
        w_len += self.write_bool(node.is_split_part);
        w_len += self.write_scalar(node.ownerid);
        w_len += self.write_bool(node.build_ao_blkdir);
        w_len += self.write_bool(node.is_error_table);
        w_len += self.write_list(node.attr_encodings.as_ref())?;

        Ok(w_len)
    }

    fn write_table_oid_info(&mut self, info: &TableOidInfo) -> WriteLen {
        self.write_array(&[
            info.rel_oid,
            info.comptype_oid,
            info.toast_oid,
            info.toast_index_oid,
            info.toast_comptype_oid,
            info.aoseg_oid,
            info.aoseg_index_oid,
            info.aoseg_comptype_oid,
            info.aovisimap_oid,
            info.aovisimap_index_oid,
            info.aovisimap_comptype_oid,
            info.aoblkdir_oid,
            info.aoblkdir_index_oid,
            info.aoblkdir_comptype_oid,
        ])
    }

    pub(crate) fn write_create_domain_stmt(&mut self, node: &CreateDomainStmt) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::CreateDomainStmt);
        w_len += self.write_list(node.domainname.as_ref())?;
        w_len += self.write_child(&node.typname)?;
        w_len += self.write_list(node.constraints.as_ref())?;
        w_len += self.write_scalar(node.domain_oid);
        Ok(w_len)
    }

    pub(crate) fn write_alter_domain_stmt(&mut self, node: &AlterDomainStmt) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::AlterDomainStmt);
        w_len += self.write_char(node.subtype);
        w_len += self.write_list(node.typname.as_ref())?;
        w_len += self.write_str(node.name.as_deref())?;
        w_len += self.write_child(&node.def)?;
        w_len += self.write_enum(node.behavior);
        Ok(w_len)
    }

    pub(crate) fn write_alter_partition_cmd(&mut self, node: &AlterPartitionCmd) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::AlterPartitionCmd);
        w_len += self.write_child(&node.partid)?;
        w_len += self.write_child(&node.arg1)?;
        w_len += self.write_child(&node.arg2)?;
        w_len += self.write_list(node.new_oids.as_ref())?;
        Ok(w_len)
    }

    pub(crate) fn write_create_queue_stmt(&mut self, node: &CreateQueueStmt) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::CreateQueueStmt);
        w_len += self.write_str(node.queue.as_deref())?;
        w_len += self.write_list(node.options.as_ref())?;
        w_len += self.write_scalar(node.queue_oid);
        w_len += self.write_list(node.optids.as_ref())?;
        Ok(w_len)
    }

    pub(crate) fn write_alter_queue_stmt(&mut self, node: &AlterQueueStmt) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::AlterQueueStmt);
        w_len += self.write_str(node.queue.as_deref())?;
        w_len += self.write_list(node.options.as_ref())?;
        w_len += self.write_list(node.optids.as_ref())?;
        Ok(w_len)
    }
}

/* Raw expressions. */
impl NodeWriter<'_> {
    pub(crate) fn write_a_expr(&mut self, node: &AExpr) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::AExpr);
        w_len += self.write_enum(node.kind);

        // Boolean connectives carry no operator name.
        match node.kind {
            AExprKind::And | AExprKind::Or | AExprKind::Not => {}
            _ => w_len += self.write_list(node.name.as_ref())?,
        }

        w_len += self.write_child(&node.lexpr)?;
        w_len += self.write_child(&node.rexpr)?;
        w_len += self.write_scalar(node.location);
        Ok(w_len)
    }

    pub(crate) fn write_column_ref(&mut self, node: &ColumnRef) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::ColumnRef);
        w_len += self.write_list(node.fields.as_ref())?;
        w_len += self.write_scalar(node.location);
        Ok(w_len)
    }

    pub(crate) fn write_param_ref(&mut self, node: &ParamRef) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::ParamRef);
        w_len += self.write_scalar(node.number);
        w_len += self.write_scalar(node.location);
        Ok(w_len)
    }

    pub(crate) fn write_a_const(&mut self, node: &AConst) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::AConst);
        w_len += self.write_literal(&node.val)?;
        w_len += self.write_child(&node.typname)?;
        w_len += self.write_scalar(node.location);
        Ok(w_len)
    }

    pub(crate) fn write_type_name(&mut self, node: &TypeName) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::TypeName);
        w_len += self.write_list(node.names.as_ref())?;
        w_len += self.write_scalar(node.typid);
        w_len += self.write_bool(node.timezone);
        w_len += self.write_bool(node.setof);
        w_len += self.write_bool(node.pct_type);
        w_len += self.write_scalar(node.typmod);
        w_len += self.write_list(node.array_bounds.as_ref())?;
        w_len += self.write_scalar(node.location);
        Ok(w_len)
    }

    pub(crate) fn write_type_cast(&mut self, node: &TypeCast) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::TypeCast);
        w_len += self.write_child(&node.arg)?;
        w_len += self.write_child(&node.typname)?;
        Ok(w_len)
    }

    pub(crate) fn write_res_target(&mut self, node: &ResTarget) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::ResTarget);
        w_len += self.write_str(node.name.as_deref())?;
        w_len += self.write_list(node.indirection.as_ref())?;
        w_len += self.write_child(&node.val)?;
        w_len += self.write_scalar(node.location);
        Ok(w_len)
    }

    pub(crate) fn write_func_call(&mut self, node: &FuncCall) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::FuncCall);
        w_len += self.write_list(node.funcname.as_ref())?;
        w_len += self.write_list(node.args.as_ref())?;
        w_len += self.write_list(node.agg_order.as_ref())?;
        w_len += self.write_bool(node.agg_star);
        w_len += self.write_bool(node.agg_distinct);
        w_len += self.write_bool(node.func_variadic);
        w_len += self.write_child(&node.over)?;
        w_len += self.write_scalar(node.location);
        Ok(w_len)
    }

    pub(crate) fn write_def_elem(&mut self, node: &DefElem) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::DefElem);
        w_len += self.write_str(node.defname.as_deref())?;
        w_len += self.write_child(&node.arg)?;
        w_len += self.write_enum(node.defaction);
        Ok(w_len)
    }
}

/* Clauses. */
impl NodeWriter<'_> {
    pub(crate) fn write_sort_clause(&mut self, node: &SortClause) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::SortClause);
        w_len += self.write_scalar(node.tle_sort_group_ref);
        w_len += self.write_scalar(node.sortop);
        w_len += self.write_bool(node.nulls_first);
        Ok(w_len)
    }

    pub(crate) fn write_group_clause(&mut self, node: &GroupClause) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::GroupClause);
        w_len += self.write_scalar(node.tle_sort_group_ref);
        w_len += self.write_scalar(node.sortop);
        w_len += self.write_bool(node.nulls_first);
        Ok(w_len)
    }

    pub(crate) fn write_row_mark_clause(&mut self, node: &RowMarkClause) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::RowMarkClause);
        w_len += self.write_scalar(node.rti);
        w_len += self.write_bool(node.for_update);
        w_len += self.write_bool(node.no_wait);
        Ok(w_len)
    }

    pub(crate) fn write_common_table_expr(&mut self, node: &CommonTableExpr) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::CommonTableExpr);
        w_len += self.write_str(node.ctename.as_deref())?;
        w_len += self.write_list(node.aliascolnames.as_ref())?;
        w_len += self.write_child(&node.ctequery)?;
        w_len += self.write_scalar(node.location);
        w_len += self.write_bool(node.cterecursive);
        w_len += self.write_scalar(node.cterefcount);
        w_len += self.write_list(node.ctecolnames.as_ref())?;
        w_len += self.write_list(node.ctecoltypes.as_ref())?;
        w_len += self.write_list(node.ctecoltypmods.as_ref())?;
        Ok(w_len)
    }
}

/* DDL elements. */
impl NodeWriter<'_> {
    pub(crate) fn write_constraint(&mut self, node: &Constraint) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Constraint);
        w_len += self.write_str(node.name.as_deref())?;
        w_len += self.write_scalar(node.conoid);
        w_len += self.write_enum(node.contype);

        match node.contype {
            ConstrType::Primary | ConstrType::Unique => {
                w_len += self.write_list(node.keys.as_ref())?;
                w_len += self.write_list(node.options.as_ref())?;
                w_len += self.write_str(node.indexspace.as_deref())?;
            }
            ConstrType::Check | ConstrType::Default => {
                w_len += self.write_child(&node.raw_expr)?;
                w_len += self.write_str(node.cooked_expr.as_deref())?;
            }
            ConstrType::Null
            | ConstrType::NotNull
            | ConstrType::AttrDeferrable
            | ConstrType::AttrNotDeferrable
            | ConstrType::AttrDeferred
            | ConstrType::AttrImmediate => {}
        }
        Ok(w_len)
    }

    pub(crate) fn write_column_def(&mut self, node: &ColumnDef) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::ColumnDef);
        w_len += self.write_str(node.colname.as_deref())?;
        w_len += self.write_child(&node.typname)?;
        w_len += self.write_scalar(node.inhcount);
        w_len += self.write_bool(node.is_local);
        w_len += self.write_bool(node.is_not_null);
        w_len += self.write_scalar(node.attnum);
        w_len += self.write_scalar(node.default_oid);
        w_len += self.write_child(&node.raw_default)?;
        w_len += self.write_bool(node.default_is_null);
        w_len += self.write_str(node.cooked_default.as_deref())?;
        w_len += self.write_list(node.constraints.as_ref())?;
        w_len += self.write_list(node.encoding.as_ref())?;
        Ok(w_len)
    }

    /// The key columns are a count-driven array; the operator classes run parallel to them.
    pub(crate) fn write_partition(&mut self, node: &Partition) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::Partition);
        w_len += self.write_scalar(node.partid);
        w_len += self.write_scalar(node.parrelid);
        w_len += self.write_char(node.parkind);
        w_len += self.write_scalar(node.parlevel);
        w_len += self.write_bool(node.paristemplate);

        let what = "partition keys";
        let keys_len = shared_len(what, &[node.paratts.len(), node.parclass.len()])?;
        let parnatts = ShortCount::from_len(what, keys_len)?;
        w_len += self.write_blob(&parnatts.to_ne_bytes());
        w_len += self.write_array(&node.paratts);
        w_len += self.write_array(&node.parclass);
        Ok(w_len)
    }

    pub(crate) fn write_partition_spec(&mut self, node: &PartitionSpec) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::PartitionSpec);
        w_len += self.write_list(node.part_elem.as_ref())?;
        w_len += self.write_child(&node.sub_spec)?;
        w_len += self.write_bool(node.istemplate);
        w_len += self.write_scalar(node.location);
        w_len += self.write_list(node.enc_clauses.as_ref())?;
        Ok(w_len)
    }

    pub(crate) fn write_partition_bound_spec(&mut self, node: &PartitionBoundSpec) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::PartitionBoundSpec);
        w_len += self.write_child(&node.part_start)?;
        w_len += self.write_child(&node.part_end)?;
        w_len += self.write_child(&node.part_every)?;
        w_len += self.write_scalar(node.location);
        Ok(w_len)
    }

    pub(crate) fn write_partition_rule(&mut self, node: &PartitionRule) -> Result<WriteLen> {
        let mut w_len = self.write_tag(NodeTag::PartitionRule);
        w_len += self.write_scalar(node.parruleid);
        w_len += self.write_scalar(node.paroid);
        w_len += self.write_scalar(node.parchildrelid);
        w_len += self.write_scalar(node.parparentoid);
        w_len += self.write_bool(node.parisdefault);
        w_len += self.write_str(node.parname.as_deref())?;
        w_len += self.write_child(&node.parrangestart)?;
        w_len += self.write_bool(node.parrangestartincl);
        w_len += self.write_child(&node.parrangeend)?;
        w_len += self.write_bool(node.parrangeendincl);
        w_len += self.write_child(&node.parrangeevery)?;
        w_len += self.write_list(node.parlistvalues.as_ref())?;
        w_len += self.write_blob(&node.parruleord.to_ne_bytes());
        w_len += self.write_list(node.parreloptions.as_ref())?;
        w_len += self.write_scalar(node.partemplatespace_id);
        w_len += self.write_child(&node.children)?;
        Ok(w_len)
    }
}
