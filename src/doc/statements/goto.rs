/*!
# `GOTO <expression>`

## Purpose
Immediately and unconditionally move execution to the specified line number.

## Remarks
The line number may be computed and fractions are dropped.
If the line doesn't exist a `Line not found` error will occur.
`GOTO` only works while a program is running.

## Example
```text
10 GOTO 30
20 PRINT "THIS WILL NOT PRINT"
30 PRINT "THIS WILL PRINT"
```

*/
