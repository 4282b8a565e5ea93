/*!
# `PRINT [<item>[;|,<item>...][;]]`
Where each item is a string literal or an expression.

## Purpose
Output information to the terminal for the operator.

## Remarks
A `PRINT` by itself outputs a newline.
Items are printed with nothing between them whether they are
separated by a semicolon (;) or a comma (,). A semicolon anywhere
in the list suppresses the newline at the end.

Numbers print with as few digits as it takes to read them back
exactly. Very large and very small numbers use an exponent.

## Example
```text
PRINT "A","B"
AB
PRINT 1/3
0.3333333333333333
PRINT 1000000*1000000*1000000*1000
1e+21
```

*/
