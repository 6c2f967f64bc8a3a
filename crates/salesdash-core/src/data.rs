//! Static dashboard datasets.

use crate::icon::Icon;
use crate::nav::{NavChild, NavSection, UserAction};
use crate::products::{Product, ProductStatus};
use crate::revenue::RevenueSegment;
use crate::stats::{ChangeDirection, ColorToken, StatCard};
use crate::trend::SalesPeriod;

static SALES_CHILDREN: [NavChild; 4] = [
    NavChild {
        name: "Orders",
        icon: Icon::ShoppingCart,
        description: "View and manage orders",
    },
    NavChild {
        name: "Transactions",
        icon: Icon::DocumentChartBar,
        description: "Track all transactions",
    },
    NavChild {
        name: "Invoices",
        icon: Icon::DocumentChartBar,
        description: "Manage customer invoices",
    },
    NavChild {
        name: "Quotations",
        icon: Icon::DocumentChartBar,
        description: "Create and track quotes",
    },
];

static CUSTOMER_CHILDREN: [NavChild; 4] = [
    NavChild {
        name: "Directory",
        icon: Icon::User,
        description: "View all customers",
    },
    NavChild {
        name: "Companies",
        icon: Icon::BuildingOffice,
        description: "Manage business accounts",
    },
    NavChild {
        name: "Support",
        icon: Icon::Phone,
        description: "Customer support cases",
    },
    NavChild {
        name: "Feedback",
        icon: Icon::ChatBubble,
        description: "Customer reviews and feedback",
    },
];

static SETTINGS_CHILDREN: [NavChild; 5] = [
    NavChild {
        name: "Account",
        icon: Icon::UserCircle,
        description: "Manage your account settings",
    },
    NavChild {
        name: "Security",
        icon: Icon::Key,
        description: "Password and authentication",
    },
    NavChild {
        name: "Appearance",
        icon: Icon::PaintBrush,
        description: "Customize your dashboard",
    },
    NavChild {
        name: "Notifications",
        icon: Icon::BellAlert,
        description: "Configure alert preferences",
    },
    NavChild {
        name: "Language",
        icon: Icon::GlobeAlt,
        description: "Change language and region",
    },
];

/// Sidebar sections, top to bottom.
pub static NAVIGATION: [NavSection; 4] = [
    NavSection {
        name: "Dashboard",
        icon: Icon::ChartBar,
        current: true,
        children: &[],
    },
    NavSection {
        name: "Sales",
        icon: Icon::CurrencyDollar,
        current: false,
        children: &SALES_CHILDREN,
    },
    NavSection {
        name: "Customers",
        icon: Icon::UserGroup,
        current: false,
        children: &CUSTOMER_CHILDREN,
    },
    NavSection {
        name: "Settings",
        icon: Icon::Cog,
        current: false,
        children: &SETTINGS_CHILDREN,
    },
];

/// Profile menu entries.
pub static USER_ACTIONS: [UserAction; 4] = [
    UserAction {
        name: "Your Profile",
        icon: Icon::UserCircle,
        description: "View and edit your profile",
    },
    UserAction {
        name: "Settings",
        icon: Icon::Cog,
        description: "Manage your preferences",
    },
    UserAction {
        name: "Notifications",
        icon: Icon::Bell,
        description: "3 unread notifications",
    },
    UserAction {
        name: "Sign out",
        icon: Icon::SignOut,
        description: "Log out of your account",
    },
];

/// KPI cards, left to right.
pub static STAT_CARDS: [StatCard; 4] = [
    StatCard {
        name: "Total Revenue",
        value: "$2.4M",
        change: "+12.3%",
        direction: ChangeDirection::Positive,
        icon: Icon::CurrencyDollar,
        color: ColorToken::Blue,
        trend: [65, 59, 80, 81, 56, 55, 70],
    },
    StatCard {
        name: "Sales Volume",
        value: "12,543",
        change: "+15.1%",
        direction: ChangeDirection::Positive,
        icon: Icon::ChartBar,
        color: ColorToken::Purple,
        trend: [40, 35, 60, 75, 45, 75, 80],
    },
    StatCard {
        name: "Conversion Rate",
        value: "24.8%",
        change: "-2.4%",
        direction: ChangeDirection::Negative,
        icon: Icon::Users,
        color: ColorToken::Pink,
        trend: [60, 55, 48, 45, 35, 45, 40],
    },
    StatCard {
        name: "Avg. Deal Size",
        value: "$12,234",
        change: "+8.7%",
        direction: ChangeDirection::Positive,
        icon: Icon::CreditCard,
        color: ColorToken::Green,
        trend: [45, 50, 55, 60, 65, 60, 65],
    },
];

/// Revenue split by customer segment, in ring order.
pub static REVENUE_SEGMENTS: [RevenueSegment; 3] = [
    RevenueSegment {
        name: "Enterprise",
        value: 45,
        growth: "+15%",
        amount: "$1.08M",
    },
    RevenueSegment {
        name: "Mid-Market",
        value: 30,
        growth: "+8%",
        amount: "$720K",
    },
    RevenueSegment {
        name: "Small Business",
        value: 25,
        growth: "+12%",
        amount: "$600K",
    },
];

const fn period(month: &'static str, sales: u32, target: u32, profit: u32) -> SalesPeriod {
    SalesPeriod {
        month,
        sales,
        target,
        profit,
    }
}

/// Twelve months of sales, January first.
pub static SALES_SERIES: [SalesPeriod; 12] = [
    period("Jan", 4000, 4400, 2400),
    period("Feb", 3000, 3800, 1800),
    period("Mar", 2000, 2800, 1200),
    period("Apr", 2780, 2600, 1680),
    period("May", 1890, 2400, 1090),
    period("Jun", 2390, 2800, 1490),
    period("Jul", 3490, 3200, 2090),
    period("Aug", 4000, 3800, 2400),
    period("Sep", 4500, 4000, 2700),
    period("Oct", 5200, 4600, 3120),
    period("Nov", 5600, 5000, 3360),
    period("Dec", 6100, 5400, 3660),
];

/// Top products in their listed order.
pub static PRODUCTS: [Product; 5] = [
    Product {
        name: "Enterprise Suite",
        category: "Software",
        sales: "$1.2M",
        growth: "+14.3%",
        status: ProductStatus::TrendingUp,
        description: "Complete business management solution",
        icon: "💼",
    },
    Product {
        name: "Business Analytics",
        category: "Analytics",
        sales: "$840K",
        growth: "+23.1%",
        status: ProductStatus::TrendingUp,
        description: "Data analytics and reporting platform",
        icon: "📊",
    },
    Product {
        name: "Security Package",
        category: "Security",
        sales: "$650K",
        growth: "+8.5%",
        status: ProductStatus::Stable,
        description: "Advanced security and protection suite",
        icon: "🔒",
    },
    Product {
        name: "Cloud Storage Pro",
        category: "Storage",
        sales: "$450K",
        growth: "-2.3%",
        status: ProductStatus::Declining,
        description: "Enterprise cloud storage solution",
        icon: "☁️",
    },
    Product {
        name: "API Services",
        category: "Development",
        sales: "$380K",
        growth: "+41.2%",
        status: ProductStatus::TrendingUp,
        description: "API management and integration tools",
        icon: "🔌",
    },
];
