use crate::parsenodes::*;
use crate::plannodes::*;
use crate::primnodes::*;
use crate::tag::NodeTag;
use crate::{List, Value};
use derive_more::From;

/// A kind the planner builds for its own use and never ships.
///
/// Such nodes can still end up in a tree handed to the encoder, which rejects them.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PlannerOnly {
    pub tag: NodeTag,
}

/// One node of a query or plan tree.
#[derive(From, PartialEq, Clone, Debug)]
pub enum Node {
    /* literals and containers */
    Value(Value),
    List(List),

    /* plan tree */
    PlannedStmt(PlannedStmt),
    Result(ResultPlan),
    Append(Append),
    SeqScan(SeqScan),
    IndexScan(IndexScan),
    SubqueryScan(SubqueryScan),
    FunctionScan(FunctionScan),
    ValuesScan(ValuesScan),
    NestLoop(NestLoop),
    MergeJoin(MergeJoin),
    HashJoin(HashJoin),
    Hash(Hash),
    Material(Material),
    Sort(Sort),
    Agg(Agg),
    WindowKey(WindowKey),
    Window(Window),
    Unique(Unique),
    SetOp(SetOp),
    Limit(Limit),
    Motion(Motion),
    Flow(Flow),
    Slice(Slice),
    SliceTable(SliceTable),

    /* expressions */
    Alias(Alias),
    Var(Var),
    Const(Const),
    Param(Param),
    Aggref(Aggref),
    FuncExpr(FuncExpr),
    OpExpr(OpExpr),
    BoolExpr(BoolExpr),
    SubLink(SubLink),
    SubPlan(SubPlan),
    RelabelType(RelabelType),
    CaseExpr(CaseExpr),
    CaseWhen(CaseWhen),
    NullTest(NullTest),
    CurrentOfExpr(CurrentOfExpr),
    TargetEntry(TargetEntry),
    RangeTblRef(RangeTblRef),
    JoinExpr(JoinExpr),
    FromExpr(FromExpr),
    OuterJoinInfo(OuterJoinInfo),
    IndexOptInfo(IndexOptInfo),
    TupleDescNode(TupleDescNode),

    /* parse tree */
    Query(Query),
    RangeTblEntry(RangeTblEntry),
    AExpr(AExpr),
    ColumnRef(ColumnRef),
    ParamRef(ParamRef),
    AConst(AConst),
    TypeName(TypeName),
    TypeCast(TypeCast),
    ResTarget(ResTarget),
    FuncCall(FuncCall),
    SortClause(SortClause),
    GroupClause(GroupClause),
    RowMarkClause(RowMarkClause),
    CommonTableExpr(CommonTableExpr),
    DefElem(DefElem),
    Constraint(Constraint),
    ColumnDef(ColumnDef),
    CreateStmt(CreateStmt),
    Partition(Partition),
    PartitionRule(PartitionRule),
    CreateDomainStmt(CreateDomainStmt),
    AlterDomainStmt(AlterDomainStmt),
    PartitionSpec(PartitionSpec),
    PartitionBoundSpec(PartitionBoundSpec),
    AlterPartitionCmd(AlterPartitionCmd),
    CreateQueueStmt(CreateQueueStmt),
    AlterQueueStmt(AlterQueueStmt),

    PlannerOnly(PlannerOnly),
}

impl Node {
    pub fn tag(&self) -> NodeTag {
        match self {
            Node::Value(val) => val.tag(),
            Node::List(list) => list.tag(),
            Node::PlannedStmt(_) => NodeTag::PlannedStmt,
            Node::Result(_) => NodeTag::Result,
            Node::Append(_) => NodeTag::Append,
            Node::SeqScan(_) => NodeTag::SeqScan,
            Node::IndexScan(_) => NodeTag::IndexScan,
            Node::SubqueryScan(_) => NodeTag::SubqueryScan,
            Node::FunctionScan(_) => NodeTag::FunctionScan,
            Node::ValuesScan(_) => NodeTag::ValuesScan,
            Node::NestLoop(_) => NodeTag::NestLoop,
            Node::MergeJoin(_) => NodeTag::MergeJoin,
            Node::HashJoin(_) => NodeTag::HashJoin,
            Node::Hash(_) => NodeTag::Hash,
            Node::Material(_) => NodeTag::Material,
            Node::Sort(_) => NodeTag::Sort,
            Node::Agg(_) => NodeTag::Agg,
            Node::WindowKey(_) => NodeTag::WindowKey,
            Node::Window(_) => NodeTag::Window,
            Node::Unique(_) => NodeTag::Unique,
            Node::SetOp(_) => NodeTag::SetOp,
            Node::Limit(_) => NodeTag::Limit,
            Node::Motion(_) => NodeTag::Motion,
            Node::Flow(_) => NodeTag::Flow,
            Node::Slice(_) => NodeTag::Slice,
            Node::SliceTable(_) => NodeTag::SliceTable,
            Node::Alias(_) => NodeTag::Alias,
            Node::Var(_) => NodeTag::Var,
            Node::Const(_) => NodeTag::Const,
            Node::Param(_) => NodeTag::Param,
            Node::Aggref(_) => NodeTag::Aggref,
            Node::FuncExpr(_) => NodeTag::FuncExpr,
            Node::OpExpr(_) => NodeTag::OpExpr,
            Node::BoolExpr(_) => NodeTag::BoolExpr,
            Node::SubLink(_) => NodeTag::SubLink,
            Node::SubPlan(_) => NodeTag::SubPlan,
            Node::RelabelType(_) => NodeTag::RelabelType,
            Node::CaseExpr(_) => NodeTag::CaseExpr,
            Node::CaseWhen(_) => NodeTag::CaseWhen,
            Node::NullTest(_) => NodeTag::NullTest,
            Node::CurrentOfExpr(_) => NodeTag::CurrentOfExpr,
            Node::TargetEntry(_) => NodeTag::TargetEntry,
            Node::RangeTblRef(_) => NodeTag::RangeTblRef,
            Node::JoinExpr(_) => NodeTag::JoinExpr,
            Node::FromExpr(_) => NodeTag::FromExpr,
            Node::OuterJoinInfo(_) => NodeTag::OuterJoinInfo,
            Node::IndexOptInfo(_) => NodeTag::IndexOptInfo,
            Node::TupleDescNode(_) => NodeTag::TupleDescNode,
            Node::Query(_) => NodeTag::Query,
            Node::RangeTblEntry(_) => NodeTag::RangeTblEntry,
            Node::AExpr(_) => NodeTag::AExpr,
            Node::ColumnRef(_) => NodeTag::ColumnRef,
            Node::ParamRef(_) => NodeTag::ParamRef,
            Node::AConst(_) => NodeTag::AConst,
            Node::TypeName(_) => NodeTag::TypeName,
            Node::TypeCast(_) => NodeTag::TypeCast,
            Node::ResTarget(_) => NodeTag::ResTarget,
            Node::FuncCall(_) => NodeTag::FuncCall,
            Node::SortClause(_) => NodeTag::SortClause,
            Node::GroupClause(_) => NodeTag::GroupClause,
            Node::RowMarkClause(_) => NodeTag::RowMarkClause,
            Node::CommonTableExpr(_) => NodeTag::CommonTableExpr,
            Node::DefElem(_) => NodeTag::DefElem,
            Node::Constraint(_) => NodeTag::Constraint,
            Node::ColumnDef(_) => NodeTag::ColumnDef,
            Node::CreateStmt(_) => NodeTag::CreateStmt,
            Node::Partition(_) => NodeTag::Partition,
            Node::PartitionRule(_) => NodeTag::PartitionRule,
            Node::CreateDomainStmt(_) => NodeTag::CreateDomainStmt,
            Node::AlterDomainStmt(_) => NodeTag::AlterDomainStmt,
            Node::PartitionSpec(_) => NodeTag::PartitionSpec,
            Node::PartitionBoundSpec(_) => NodeTag::PartitionBoundSpec,
            Node::AlterPartitionCmd(_) => NodeTag::AlterPartitionCmd,
            Node::CreateQueueStmt(_) => NodeTag::CreateQueueStmt,
            Node::AlterQueueStmt(_) => NodeTag::AlterQueueStmt,
            Node::PlannerOnly(node) => node.tag,
        }
    }

    pub fn into_ptr(self) -> Option<Box<Node>> {
        Some(Box::new(self))
    }
}
